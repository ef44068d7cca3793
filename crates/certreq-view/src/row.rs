use certreq_model::{CertificateRequest, Identifiable, RequestStatus, Student, Subject};

/// A dataset row the projectors understand.
pub trait ListRow: Identifiable {
    /// Name used for duplicate detection and for ordering the duplicates view.
    fn display_name(&self) -> &str;

    /// Lifecycle state for the status discriminant. Rows without one (e.g.
    /// roster entries) never match a status filter.
    fn status(&self) -> Option<RequestStatus> {
        None
    }

    /// True when the row matches an already-lowercased search needle.
    fn matches_search(&self, needle: &str) -> bool;
}

impl ListRow for Student {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.roll_number.to_lowercase().contains(needle)
    }
}

impl ListRow for Subject {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.subject_code.to_lowercase().contains(needle)
    }
}

impl ListRow for CertificateRequest {
    fn display_name(&self) -> &str {
        &self.student.name
    }

    fn status(&self) -> Option<RequestStatus> {
        Some(self.status)
    }

    fn matches_search(&self, needle: &str) -> bool {
        self.student.matches_search(needle) || self.subject.matches_search(needle)
    }
}
