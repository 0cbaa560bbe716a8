use chrono::NaiveDate;
use taskmatrix_core::db::open_db_in_memory;
use taskmatrix_core::{
    FilterCriteria, Importance, Quadrant, SqliteTaskRepository, Task, TaskDraft, TaskService,
    Urgency,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn seed(service: &TaskService<SqliteTaskRepository<'_>>) -> Vec<Task> {
    let drafts = [
        (
            "Quarterly report",
            Some("work-reports"),
            Some("2026-09-20"),
            Importance::Important,
            Urgency::Urgent,
        ),
        (
            "Read a book",
            Some("leisure"),
            Some("2026-10-05"),
            Importance::Important,
            Urgency::NotUrgent,
        ),
        (
            "Answer survey",
            Some("REPORTING"),
            Some("2026-09-01"),
            Importance::NotImportant,
            Urgency::Urgent,
        ),
        (
            "Sort inbox",
            None,
            None,
            Importance::NotImportant,
            Urgency::NotUrgent,
        ),
    ];

    drafts
        .iter()
        .map(|(title, label, due, importance, urgency)| {
            service
                .create(&TaskDraft {
                    title: (*title).to_string(),
                    details: None,
                    label: label.map(str::to_string),
                    due_date: due.map(date),
                    importance: Some(*importance),
                    urgency: Some(*urgency),
                })
                .unwrap()
        })
        .collect()
}

#[test]
fn list_without_filters_returns_everything_in_id_order() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));
    let seeded = seed(&service);

    let listed = service.list(&FilterCriteria::default(), None, None).unwrap();
    assert_eq!(listed, seeded);
}

#[test]
fn label_filter_is_case_insensitive_substring_with_due_date_desc() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));
    seed(&service);

    let criteria = FilterCriteria {
        label: Some("Report".to_string()),
        ..FilterCriteria::default()
    };
    let listed = service
        .list(&criteria, Some("dueDate"), Some("desc"))
        .unwrap();

    let titles: Vec<&str> = listed.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Quarterly report", "Answer survey"]);
}

#[test]
fn due_date_bounds_are_inclusive() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));
    seed(&service);

    let criteria = FilterCriteria {
        due_after: Some(date("2026-09-01")),
        due_before: Some(date("2026-09-20")),
        ..FilterCriteria::default()
    };
    let listed = service.list(&criteria, None, None).unwrap();

    let titles: Vec<&str> = listed.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Quarterly report", "Answer survey"]);
}

#[test]
fn independent_axis_filters_narrow_the_list() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));
    seed(&service);

    let important_only = FilterCriteria {
        importance: Some(Importance::Important),
        ..FilterCriteria::default()
    };
    let listed = service.list(&important_only, None, None).unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|t| t.importance == Importance::Important));

    let urgent_and_important = FilterCriteria {
        importance: Some(Importance::Important),
        urgency: Some(Urgency::Urgent),
        ..FilterCriteria::default()
    };
    let listed = service.list(&urgent_and_important, None, None).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Quarterly report");
}

#[test]
fn quadrant_filter_selects_its_matrix_cell() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));
    seed(&service);

    for quadrant in Quadrant::ALL {
        let criteria = FilterCriteria {
            quadrant: Some(quadrant),
            ..FilterCriteria::default()
        };
        let listed = service.list(&criteria, None, None).unwrap();
        assert_eq!(listed.len(), 1, "each seeded quadrant holds one task");
        assert_eq!(listed[0].quadrant(), quadrant);
    }
}

#[test]
fn quadrant_takes_precedence_over_conflicting_axis_filters() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));
    seed(&service);

    let quadrant_only = FilterCriteria {
        quadrant: Some(Quadrant::ImportantUrgent),
        ..FilterCriteria::default()
    };
    let with_conflict = FilterCriteria {
        quadrant: Some(Quadrant::ImportantUrgent),
        urgency: Some(Urgency::NotUrgent),
        ..FilterCriteria::default()
    };

    let expected = service.list(&quadrant_only, None, None).unwrap();
    let actual = service.list(&with_conflict, None, None).unwrap();

    assert_eq!(expected.len(), 1);
    assert_eq!(actual, expected);
}

#[test]
fn unknown_sort_field_falls_back_to_id_order() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));
    let seeded = seed(&service);

    let listed = service
        .list(
            &FilterCriteria::default(),
            Some("details; DROP TABLE tasks"),
            Some("sideways"),
        )
        .unwrap();
    assert_eq!(listed, seeded);
}

#[test]
fn title_sort_descending_orders_lexicographically() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));
    seed(&service);

    let listed = service
        .list(&FilterCriteria::default(), Some("title"), Some("DESC"))
        .unwrap();
    let titles: Vec<&str> = listed.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Sort inbox", "Read a book", "Quarterly report", "Answer survey"]
    );
}

#[test]
fn list_is_idempotent_without_intervening_mutation() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));
    seed(&service);

    let criteria = FilterCriteria {
        importance: Some(Importance::NotImportant),
        ..FilterCriteria::default()
    };
    let first = service.list(&criteria, Some("title"), Some("desc")).unwrap();
    let second = service.list(&criteria, Some("title"), Some("desc")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn no_matches_is_an_empty_list_not_an_error() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));
    seed(&service);

    let criteria = FilterCriteria {
        label: Some("no such label".to_string()),
        ..FilterCriteria::default()
    };
    assert!(service.list(&criteria, None, None).unwrap().is_empty());
}

#[test]
fn like_metacharacters_in_label_filter_match_literally() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    service
        .create(&TaskDraft {
            title: "percent task".to_string(),
            label: Some("100%_done".to_string()),
            importance: Some(Importance::Important),
            urgency: Some(Urgency::Urgent),
            ..TaskDraft::default()
        })
        .unwrap();
    service
        .create(&TaskDraft {
            title: "decoy".to_string(),
            label: Some("100 done".to_string()),
            importance: Some(Importance::Important),
            urgency: Some(Urgency::Urgent),
            ..TaskDraft::default()
        })
        .unwrap();

    let criteria = FilterCriteria {
        label: Some("%_".to_string()),
        ..FilterCriteria::default()
    };
    let listed = service.list(&criteria, None, None).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "percent task");
}
