use common::grid::filter::{FilterState, FilterValue};
use common::grid::record::GridRecord;
use common::grid::{GridState, PAGE_SIZE};
use common::model::demo_request::{DemoRequest, DemoRequestStatus};
use common::model::subscriber::NewsletterSubscriber;
use common::model::RecordId;

fn subscriber(id: usize, email: &str, active: bool) -> NewsletterSubscriber {
    NewsletterSubscriber {
        id: RecordId::new(id.to_string()),
        email: email.to_string(),
        name: None,
        is_active: active,
        source: None,
        subscribed_at: None,
        created_at: None,
        updated_at: None,
    }
}

fn demo_request(id: usize, name: &str, company: &str, status: DemoRequestStatus) -> DemoRequest {
    DemoRequest {
        id: RecordId::new(id.to_string()),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: None,
        company: Some(company.to_string()),
        role: None,
        message: None,
        preferred_date: None,
        status,
        created_at: None,
        updated_at: None,
    }
}

/// 15 subscribers, three of which contain "test" in their email.
fn fifteen_subscribers() -> Vec<NewsletterSubscriber> {
    (1..=15)
        .map(|i| {
            let email = if i % 5 == 0 {
                format!("test{}@example.com", i)
            } else {
                format!("user{}@example.com", i)
            };
            subscriber(i, &email, i % 2 == 0)
        })
        .collect()
}

#[test]
fn email_filter_on_fifteen_subscribers_fits_one_page() {
    let records = fifteen_subscribers();
    let mut grid = GridState::default();
    grid.set_filter("email", Some(FilterValue::Text("test".into())));

    let page = grid.project(&records);
    assert_eq!(page.rows.len(), 3);
    assert_eq!(page.filtered, 3);
    assert_eq!(page.total, 15);
    assert_eq!(page.total_pages, 1);
    assert!(!page.show_pagination);
}

#[test]
fn unfiltered_fifteen_subscribers_span_two_pages() {
    let records = fifteen_subscribers();
    let mut grid = GridState::default();

    let first = grid.project(&records);
    assert_eq!(first.rows.len(), PAGE_SIZE);
    assert!(first.show_pagination);
    assert!(!first.has_prev);
    assert!(first.has_next);

    grid.go_to_page(2, first.filtered);
    let second = grid.project(&records);
    assert_eq!(second.rows.len(), 5);
    assert!(second.has_prev);
    assert!(!second.has_next);
}

#[test]
fn every_filter_change_returns_to_page_one() {
    let records: Vec<_> = (1..=40)
        .map(|i| subscriber(i, &format!("user{}@example.com", i), i % 3 == 0))
        .collect();
    let mut grid = GridState::default();

    grid.go_to_page(4, records.len());
    assert_eq!(grid.pagination().page(), 4);
    grid.set_search("user");
    assert_eq!(grid.pagination().page(), 1);

    grid.go_to_page(2, records.len());
    grid.set_filter("status", Some(FilterValue::Flag(true)));
    assert_eq!(grid.pagination().page(), 1);

    grid.go_to_page(2, 13);
    grid.set_filter("status", None);
    assert_eq!(grid.pagination().page(), 1);

    grid.go_to_page(3, records.len());
    grid.reset_filters();
    assert_eq!(grid.pagination().page(), 1);
}

#[test]
fn displayed_rows_equal_the_and_of_every_predicate() {
    let statuses = [
        DemoRequestStatus::Pending,
        DemoRequestStatus::Confirmed,
        DemoRequestStatus::Cancelled,
        DemoRequestStatus::Completed,
    ];
    let names = ["Ana", "Bruno", "Carla", "Dario", "Elena", "Fabio"];
    let companies = ["Keller", "Remax", "Compass"];
    let records: Vec<_> = (0..36)
        .map(|i| {
            demo_request(
                i,
                names[i % names.len()],
                companies[i % companies.len()],
                statuses[i % statuses.len()],
            )
        })
        .collect();

    let searches = ["", "a", "EL", "zzz"];
    let company_filters = [None, Some("re"), Some("compass")];
    let status_filters = [None, Some("pending"), Some("co")];

    for search in searches {
        for company in company_filters {
            for status in status_filters {
                let mut filters = FilterState::default();
                filters.set_search(search);
                filters.set("company", company.map(|c| FilterValue::Text(c.into())));
                filters.set("status", status.map(|s| FilterValue::Text(s.into())));

                let expected: Vec<&RecordId> = records
                    .iter()
                    .filter(|r| {
                        let search_ok = search.is_empty()
                            || r.search_haystack()
                                .iter()
                                .any(|f| f.to_lowercase().contains(&search.to_lowercase()));
                        let company_ok = company.is_none_or(|c| {
                            r.company.as_deref().unwrap_or("").to_lowercase().contains(c)
                        });
                        let status_ok = status.is_none_or(|s| r.status.as_str().contains(s));
                        search_ok && company_ok && status_ok
                    })
                    .map(|r| &r.id)
                    .collect();

                let actual: Vec<&RecordId> = common::grid::filter::apply(&records, &filters)
                    .into_iter()
                    .map(|r| &r.id)
                    .collect();

                assert_eq!(actual, expected, "search={search:?} company={company:?} status={status:?}");
            }
        }
    }
}

#[test]
fn page_never_holds_more_than_page_size_rows() {
    for total in [0usize, 1, 9, 10, 11, 25, 99] {
        let records: Vec<_> = (0..total)
            .map(|i| subscriber(i, &format!("u{}@x.io", i), true))
            .collect();
        let mut grid = GridState::default();
        let pages = grid.project(&records).total_pages;
        for page in 1..=pages.max(1) {
            grid.go_to_page(page, total);
            let view = grid.project(&records);
            assert!(view.rows.len() <= PAGE_SIZE);
            if page < pages {
                assert_eq!(view.rows.len(), PAGE_SIZE);
            }
        }
    }
}

#[test]
fn refetch_with_fewer_records_clamps_the_page() {
    let mut records: Vec<_> = (0..21)
        .map(|i| subscriber(i, &format!("u{}@x.io", i), true))
        .collect();
    let mut grid = GridState::default();
    grid.go_to_page(3, records.len());
    assert_eq!(grid.project(&records).rows.len(), 1);

    // The only row on page 3 was deleted server-side.
    records.pop();
    let view = grid.project(&records);
    assert_eq!(view.page, 2);
    assert_eq!(view.rows.len(), PAGE_SIZE);
    assert!(grid.clamp_to(&records));
    assert_eq!(grid.pagination().page(), 2);
}
