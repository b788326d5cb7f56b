//! Repository Integration Tests
//!
//! Tests against an in-memory SQLite database, covering the ordering
//! round-trip, reorder idempotence, boundary validation, and user search
//! paging.

#[cfg(test)]
mod tests {
    use crate::domain::{AgendaEvent, Board, Card, CardStatus, ChecklistItem, DomainError, User, UserRole};
    use crate::repository::{
        init_db, BoardRepository, CardColumnOperations, CardRepository, ChecklistRepository,
        ColumnScope, EventRepository, OrderedRepository, Repository, SearchableRepository,
        SharedConn, UserRepository,
    };
    use chrono::NaiveDate;
    use std::path::PathBuf;

    async fn setup_test_conn() -> SharedConn {
        // Use in-memory database for tests
        let db_path = PathBuf::from(":memory:");
        let db_state = init_db(&db_path).await.expect("Failed to init test DB");
        db_state.conn
    }

    async fn board_repo() -> BoardRepository {
        BoardRepository::new(setup_test_conn().await)
    }

    const OWNER: u32 = 1;

    async fn seed_boards(repo: &BoardRepository, names: &[&str]) -> Vec<u32> {
        let mut ids = Vec::new();
        for name in names {
            let created = repo
                .create(&Board::new(0, OWNER, name.to_string(), 0))
                .await
                .expect("Failed to create board");
            ids.push(created.id);
        }
        ids
    }

    #[tokio::test]
    async fn test_create_assigns_next_position() {
        let repo = board_repo().await;
        let ids = seed_boards(&repo, &["Budget", "Chores", "Trips"]).await;

        let boards = repo.list_by_scope(&OWNER).await.unwrap();
        assert_eq!(boards.iter().map(|b| b.id).collect::<Vec<_>>(), ids);
        assert_eq!(boards.iter().map(|b| b.position).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_reorder_round_trip() {
        let repo = board_repo().await;
        let ids = seed_boards(&repo, &["A", "B", "C", "D"]).await;

        let new_order = vec![ids[2], ids[0], ids[3], ids[1]];
        repo.reorder(&OWNER, &new_order).await.expect("Reorder failed");

        // load_collection returns exactly the committed order
        let boards = repo.list_by_scope(&OWNER).await.unwrap();
        assert_eq!(boards.iter().map(|b| b.id).collect::<Vec<_>>(), new_order);
        assert_eq!(boards.iter().map(|b| b.position).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn test_reorder_is_idempotent() {
        let repo = board_repo().await;
        let ids = seed_boards(&repo, &["A", "B", "C"]).await;

        let new_order = vec![ids[1], ids[2], ids[0]];
        let first = repo.reorder(&OWNER, &new_order).await.unwrap();
        assert!(first > 0);

        // Committing the same order again writes nothing
        let second = repo.reorder(&OWNER, &new_order).await.unwrap();
        assert_eq!(second, 0);

        let boards = repo.list_by_scope(&OWNER).await.unwrap();
        assert_eq!(boards.iter().map(|b| b.id).collect::<Vec<_>>(), new_order);
    }

    #[tokio::test]
    async fn test_reorder_writes_only_changed_rows() {
        let repo = board_repo().await;
        let ids = seed_boards(&repo, &["A", "B", "C", "D"]).await;

        // Swap the middle two; first and last rows keep their positions
        let written = repo
            .reorder(&OWNER, &[ids[0], ids[2], ids[1], ids[3]])
            .await
            .unwrap();
        assert_eq!(written, 2);
    }

    #[tokio::test]
    async fn test_reorder_rejects_foreign_id_before_writing() {
        let repo = board_repo().await;
        let ids = seed_boards(&repo, &["A", "B"]).await;

        let err = repo.reorder(&OWNER, &[ids[1], 999]).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        // Store still holds the server-confirmed order
        let boards = repo.list_by_scope(&OWNER).await.unwrap();
        assert_eq!(boards.iter().map(|b| b.id).collect::<Vec<_>>(), ids);
    }

    #[tokio::test]
    async fn test_reorder_rejects_wrong_cardinality() {
        let repo = board_repo().await;
        let ids = seed_boards(&repo, &["A", "B", "C"]).await;

        let err = repo.reorder(&OWNER, &[ids[0], ids[1]]).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        let err = repo
            .reorder(&OWNER, &[ids[0], ids[1], ids[1]])
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_reorder_scopes_are_independent() {
        let repo = board_repo().await;
        let mine = seed_boards(&repo, &["A", "B"]).await;
        let other = repo
            .create(&Board::new(0, OWNER + 1, "Theirs".to_string(), 0))
            .await
            .unwrap();

        repo.reorder(&OWNER, &[mine[1], mine[0]]).await.unwrap();

        let theirs = repo.list_by_scope(&(OWNER + 1)).await.unwrap();
        assert_eq!(theirs.len(), 1);
        assert_eq!(theirs[0].id, other.id);
        assert_eq!(theirs[0].position, 0);
    }

    #[tokio::test]
    async fn test_board_name_required() {
        let repo = board_repo().await;
        let err = repo
            .create(&Board::new(0, OWNER, "   ".to_string(), 0))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_card_reorder_within_column() {
        let conn = setup_test_conn().await;
        let repo = CardRepository::new(conn);

        let mut ids = Vec::new();
        for title in ["Rent", "Groceries", "Internet"] {
            let card = repo
                .create(&Card::new(0, 5, title.to_string(), CardStatus::Todo))
                .await
                .unwrap();
            ids.push(card.id);
        }

        let scope = ColumnScope::new(5, CardStatus::Todo);
        repo.reorder(&scope, &[ids[2], ids[1], ids[0]]).await.unwrap();

        let cards = repo.list_by_scope(&scope).await.unwrap();
        assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![ids[2], ids[1], ids[0]]);
    }

    #[tokio::test]
    async fn test_card_move_to_column_reindexes_both() {
        let conn = setup_test_conn().await;
        let repo = CardRepository::new(conn);

        let mut todo = Vec::new();
        for title in ["A", "B", "C"] {
            todo.push(repo.create(&Card::new(0, 5, title.to_string(), CardStatus::Todo)).await.unwrap().id);
        }
        let doing = repo
            .create(&Card::new(0, 5, "D".to_string(), CardStatus::Doing))
            .await
            .unwrap()
            .id;

        // Move B into doing at the top
        let moved = repo.move_to_column(todo[1], CardStatus::Doing, 0).await.unwrap();
        assert_eq!(moved.status, CardStatus::Doing);
        assert_eq!(moved.position, 0);

        let todo_cards = repo.list_by_scope(&ColumnScope::new(5, CardStatus::Todo)).await.unwrap();
        assert_eq!(todo_cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![todo[0], todo[2]]);
        assert_eq!(todo_cards.iter().map(|c| c.position).collect::<Vec<_>>(), vec![0, 1]);

        let doing_cards = repo.list_by_scope(&ColumnScope::new(5, CardStatus::Doing)).await.unwrap();
        assert_eq!(doing_cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![todo[1], doing]);
    }

    #[tokio::test]
    async fn test_checklist_ordering() {
        let conn = setup_test_conn().await;
        let repo = ChecklistRepository::new(conn);

        let mut ids = Vec::new();
        for text in ["milk", "eggs", "bread"] {
            ids.push(repo.create(&ChecklistItem::new(0, 9, text.to_string(), 0)).await.unwrap().id);
        }

        repo.reorder(&9, &[ids[1], ids[0], ids[2]]).await.unwrap();
        let items = repo.list_by_scope(&9).await.unwrap();
        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![ids[1], ids[0], ids[2]]);

        let toggled = repo.toggle_done(ids[0]).await.unwrap();
        assert!(toggled.done);
    }

    #[tokio::test]
    async fn test_checklist_delete_then_reindex_closes_gap() {
        let conn = setup_test_conn().await;
        let repo = ChecklistRepository::new(conn);

        let mut ids = Vec::new();
        for text in ["a", "b", "c"] {
            ids.push(repo.create(&ChecklistItem::new(0, 9, text.to_string(), 0)).await.unwrap().id);
        }

        repo.delete(ids[1]).await.unwrap();
        repo.reindex(&9).await.unwrap();

        let items = repo.list_by_scope(&9).await.unwrap();
        assert_eq!(items.iter().map(|i| i.position).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[tokio::test]
    async fn test_user_search_paging() {
        let conn = setup_test_conn().await;
        let repo = UserRepository::new(conn);

        for i in 0..12 {
            repo.create(&User::new(
                0,
                format!("Member {:02}", i),
                format!("member{:02}@example.com", i),
                UserRole::Member,
            ))
            .await
            .unwrap();
        }
        repo.create(&User::new(0, "Admin".to_string(), "admin@example.com".to_string(), UserRole::Admin))
            .await
            .unwrap();

        let (page, total) = repo.search_page("member", 10, 0).await.unwrap();
        assert_eq!(total, 12);
        assert_eq!(page.len(), 10);
        assert_eq!(page[0].name, "Member 00");

        let (page2, total2) = repo.search_page("member", 10, 10).await.unwrap();
        assert_eq!(total2, 12);
        assert_eq!(page2.len(), 2);

        // Empty query matches everyone
        let (_, all) = repo.search_page("", 10, 0).await.unwrap();
        assert_eq!(all, 13);
    }

    #[tokio::test]
    async fn test_user_search_escapes_like_wildcards() {
        let conn = setup_test_conn().await;
        let repo = UserRepository::new(conn);

        repo.create(&User::new(0, "Percy".to_string(), "percy@example.com".to_string(), UserRole::Member))
            .await
            .unwrap();

        let (hits, total) = repo.search_page("%", 10, 0).await.unwrap();
        assert_eq!(total, 0);
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let conn = setup_test_conn().await;
        let repo = UserRepository::new(conn);

        repo.create(&User::new(0, "A".to_string(), "a@example.com".to_string(), UserRole::Member))
            .await
            .unwrap();
        let err = repo
            .create(&User::new(0, "B".to_string(), "a@example.com".to_string(), UserRole::Member))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_set_role() {
        let conn = setup_test_conn().await;
        let repo = UserRepository::new(conn);

        let user = repo
            .create(&User::new(0, "A".to_string(), "a@example.com".to_string(), UserRole::Member))
            .await
            .unwrap();
        let promoted = repo.set_role(user.id, UserRole::Admin).await.unwrap();
        assert_eq!(promoted.role, UserRole::Admin);
    }

    #[tokio::test]
    async fn test_events_by_range() {
        let conn = setup_test_conn().await;
        let repo = EventRepository::new(conn);

        let in_month = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        let next_month = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        repo.create(&AgendaEvent::new(0, OWNER, "Pay rent".to_string(), in_month))
            .await
            .unwrap();
        repo.create(&AgendaEvent::new(0, OWNER, "Dentist".to_string(), next_month))
            .await
            .unwrap();
        // Someone else's event in the same month
        repo.create(&AgendaEvent::new(0, OWNER + 1, "Their thing".to_string(), in_month))
            .await
            .unwrap();

        let events = repo
            .list_by_range(
                OWNER,
                NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Pay rent");
    }

    #[tokio::test]
    async fn test_dashboard_totals() {
        let conn = setup_test_conn().await;
        let repo = CardRepository::new(conn);

        let mut salary = Card::new(0, 1, "Salary".to_string(), CardStatus::Done);
        salary.amount_cents = Some(250_000);
        repo.create(&salary).await.unwrap();

        let mut rent = Card::new(0, 1, "Rent".to_string(), CardStatus::Done);
        rent.amount_cents = Some(-90_000);
        repo.create(&rent).await.unwrap();

        // Not done yet, so it must not count
        let mut pending = Card::new(0, 1, "Car".to_string(), CardStatus::Todo);
        pending.amount_cents = Some(-500_000);
        repo.create(&pending).await.unwrap();

        let now = chrono::Utc::now().timestamp_millis();
        let (income, expense) = repo.amount_totals(now - 1_000, now + 1_000).await.unwrap();
        assert_eq!(income, 250_000);
        assert_eq!(expense, -90_000);
    }
}
