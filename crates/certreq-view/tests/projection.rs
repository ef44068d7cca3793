//! Behavior tests for filtering, pagination, and roster statistics.

use certreq_model::{
    CertificateRequest, RequestId, RequestStatus, Student, StudentId, Subject, SubjectId,
};
use certreq_view::{FilterState, StatusFilter, project, roster_stats};
use proptest::prelude::*;

fn student(id: &str, name: &str) -> Student {
    Student {
        id: StudentId::new(id).expect("student id"),
        name: name.to_string(),
        email: format!("{id}@example.edu"),
        roll_number: format!("R-{id}"),
    }
}

fn subject() -> Subject {
    Subject {
        id: SubjectId::new("sub-1").expect("subject id"),
        name: "Ecology".to_string(),
        subject_code: "FECS01".to_string(),
        teacher_id: None,
    }
}

fn request(id: &str, name: &str, status: RequestStatus) -> CertificateRequest {
    CertificateRequest {
        id: RequestId::new(id).expect("request id"),
        student: student(id, name),
        subject: subject(),
        status,
        verified_total_marks: None,
        due_date: None,
        created_at: None,
        updated_at: None,
    }
}

fn five_requests() -> Vec<CertificateRequest> {
    vec![
        request("r1", "Ada", RequestStatus::Pending),
        request("r2", "Grace", RequestStatus::Pending),
        request("r3", "Edsger", RequestStatus::Completed),
        request("r4", "Barbara", RequestStatus::Pending),
        request("r5", "Donald", RequestStatus::Completed),
    ]
}

#[test]
fn filter_change_resets_page_and_reprojects() {
    let dataset = five_requests();
    let mut state = FilterState::new();

    let page_one = project(&dataset, &state, 2);
    assert_eq!(page_one.total_items, 5);
    assert_eq!(page_one.total_pages, 3);
    let ids: Vec<&str> = page_one.page_items.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["r1", "r2"]);

    state.set_page(3);
    assert_eq!(state.page(), 3);

    state.set_filter(StatusFilter::Status(RequestStatus::Completed));
    assert_eq!(state.page(), 1, "discriminant change must reset the page");

    let completed = project(&dataset, &state, 2);
    assert_eq!(completed.total_items, 2);
    assert_eq!(completed.total_pages, 1);
    let ids: Vec<&str> = completed.page_items.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["r3", "r5"]);
}

#[test]
fn page_change_leaves_discriminant_untouched() {
    let mut state = FilterState::new();
    state.set_filter(StatusFilter::Status(RequestStatus::Pending));
    state.set_page(2);
    assert_eq!(state.filter(), StatusFilter::Status(RequestStatus::Pending));
    assert_eq!(state.page(), 2);
}

#[test]
fn zero_matches_means_zero_pages() {
    let dataset = five_requests();
    let mut state = FilterState::new();
    state.set_filter(StatusFilter::Status(RequestStatus::Rejected));

    let projection = project(&dataset, &state, 2);
    assert_eq!(projection.total_items, 0);
    assert_eq!(projection.total_pages, 0, "no matches is zero pages, not one");
    assert!(projection.is_empty());
}

#[test]
fn page_beyond_the_end_yields_an_empty_slice() {
    let dataset = five_requests();
    let mut state = FilterState::new();
    state.set_page(9);

    let projection = project(&dataset, &state, 2);
    assert!(projection.is_empty());
    assert_eq!(projection.total_pages, 3);
}

#[test]
fn search_narrows_before_pagination() {
    let dataset = five_requests();
    let mut state = FilterState::new();
    state.set_page(2);
    state.set_search("GRACE");
    assert_eq!(state.page(), 1, "search change must reset the page");

    let projection = project(&dataset, &state, 2);
    assert_eq!(projection.total_items, 1);
    assert_eq!(projection.page_items[0].id.as_str(), "r2");
}

#[test]
fn headline_counters_ignore_filter_and_page() {
    let dataset = five_requests();
    let stats = roster_stats(&dataset);
    assert_eq!(stats.total, 5);
    assert_eq!(stats.pending, 3);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.rejected, 0);
    assert_eq!(stats.count_for(RequestStatus::Pending), 3);
}

#[test]
fn duplicate_names_are_detected_case_insensitively() {
    let dataset = vec![
        request("r1", "Ada Lovelace", RequestStatus::Pending),
        request("r2", "  ada lovelace ", RequestStatus::Completed),
        request("r3", "Grace Hopper", RequestStatus::Pending),
    ];
    assert_eq!(roster_stats(&dataset).duplicate_names, 1);

    let mut state = FilterState::new();
    state.set_filter(StatusFilter::Duplicates);
    let projection = project(&dataset, &state, 10);
    assert_eq!(projection.total_items, 2);
    let ids: Vec<&str> = projection.page_items.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["r1", "r2"]);
}

proptest! {
    // Pages partition the filtered collection: the slices sum to the filtered
    // count and no two pages share an item.
    #[test]
    fn pages_partition_the_filtered_set(
        len in 0usize..40,
        page_size in 1usize..7,
    ) {
        let dataset: Vec<CertificateRequest> = (0..len)
            .map(|i| request(&format!("r{i}"), &format!("Student {i}"), RequestStatus::Pending))
            .collect();
        let mut state = FilterState::new();

        let total_pages = project(&dataset, &state, page_size).total_pages;
        let mut seen = std::collections::BTreeSet::new();
        let mut covered = 0usize;
        for page in 1..=total_pages {
            state.set_page(page);
            let projection = project(&dataset, &state, page_size);
            covered += projection.page_items.len();
            for row in &projection.page_items {
                prop_assert!(seen.insert(row.id.as_str().to_string()), "page overlap");
            }
        }
        prop_assert_eq!(covered, len);

        state.set_page(total_pages + 1);
        prop_assert!(project(&dataset, &state, page_size).is_empty());
    }
}
