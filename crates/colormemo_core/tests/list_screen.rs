use colormemo_core::db::open_db_in_memory;
use colormemo_core::{
    ListScreen, Memo, MemoId, MemoRepository, Navigation, RepoError, RepoResult, ScreenError,
    ScreenState, SqliteMemoRepository,
};
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// Shared-handle repository double so a test can mutate the "store" while
/// the screen under test holds its own handle. Acts like the real store for
/// membership semantics; `fail_next_delete` simulates a write failure.
#[derive(Default)]
struct SharedStore {
    memos: Vec<Memo>,
    fail_next_delete: bool,
}

#[derive(Clone, Default)]
struct SharedRepo(Rc<RefCell<SharedStore>>);

impl SharedRepo {
    fn insert(&self, memo: Memo) {
        self.0.borrow_mut().memos.push(memo);
    }

    fn arm_delete_failure(&self) {
        self.0.borrow_mut().fail_next_delete = true;
    }

    fn ids(&self) -> Vec<MemoId> {
        self.0.borrow().memos.iter().map(|memo| memo.id).collect()
    }
}

impl MemoRepository for SharedRepo {
    fn create_memo(&self, memo: &Memo) -> RepoResult<MemoId> {
        self.insert(memo.clone());
        Ok(memo.id)
    }

    fn update_memo_text(&self, id: MemoId, text: &str) -> RepoResult<()> {
        let mut store = self.0.borrow_mut();
        match store.memos.iter_mut().find(|memo| memo.id == id) {
            Some(memo) => {
                memo.text = text.to_string();
                Ok(())
            }
            None => Err(RepoError::NotFound(id)),
        }
    }

    fn get_memo(&self, id: MemoId) -> RepoResult<Option<Memo>> {
        Ok(self
            .0
            .borrow()
            .memos
            .iter()
            .find(|memo| memo.id == id)
            .cloned())
    }

    fn list_memos(&self) -> RepoResult<Vec<Memo>> {
        Ok(self.0.borrow().memos.clone())
    }

    fn delete_memo(&mut self, id: MemoId) -> RepoResult<()> {
        let mut store = self.0.borrow_mut();
        if store.fail_next_delete {
            store.fail_next_delete = false;
            return Err(RepoError::InvalidData("simulated write failure".into()));
        }
        let before = store.memos.len();
        store.memos.retain(|memo| memo.id != id);
        if store.memos.len() == before {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

#[test]
fn screen_starts_idle_and_loads_on_appear() {
    let repo = SharedRepo::default();
    repo.insert(Memo::new("one"));

    let mut screen = ListScreen::new(repo.clone());
    assert_eq!(screen.state(), ScreenState::Idle);
    assert_eq!(screen.row_count(), 0);

    screen.on_appear().unwrap();
    assert_eq!(screen.state(), ScreenState::Loaded);
    assert_eq!(screen.row_count(), 1);
}

#[test]
fn row_count_tracks_store_on_every_appearance() {
    let repo = SharedRepo::default();
    let mut screen = ListScreen::new(repo.clone());

    for expected in 1..=3 {
        repo.insert(Memo::new(format!("memo {expected}")));
        // Every visibility event refetches; nothing is cached across them.
        screen.on_appear().unwrap();
        assert_eq!(screen.row_count(), expected);
    }
}

#[test]
fn render_row_formats_text_and_record_date() {
    let repo = SharedRepo::default();
    repo.insert(Memo::with_id(Uuid::new_v4(), "buy milk", 1_700_000_000_000));

    let mut screen = ListScreen::new(repo);
    screen.on_appear().unwrap();

    let row = screen.render_row(0).unwrap();
    assert_eq!(row.text, "buy milk");
    // 2023-11-14T22:13:20Z
    assert_eq!(row.recorded_at, "2023-11-14 22:13");
}

#[test]
fn select_row_navigates_to_detail_with_that_record() {
    let repo = SharedRepo::default();
    let memo = Memo::new("open me");
    repo.insert(memo.clone());

    let mut screen = ListScreen::new(repo);
    screen.on_appear().unwrap();

    match screen.select_row(0).unwrap() {
        Navigation::Detail(selected) => assert_eq!(selected, memo),
        other => panic!("unexpected navigation: {other:?}"),
    }
}

#[test]
fn add_navigates_to_compose_mode() {
    let screen = ListScreen::new(SharedRepo::default());
    assert_eq!(screen.add_tapped(), Navigation::Compose);
}

#[test]
fn delete_row_removes_matching_id_from_store_and_cache() {
    let repo = SharedRepo::default();
    let a = Memo::new("buy milk");
    let b = Memo::new("walk dog");
    repo.insert(a.clone());
    repo.insert(b.clone());

    let mut screen = ListScreen::new(repo.clone());
    screen.on_appear().unwrap();
    assert_eq!(screen.row_count(), 2);

    let b_row = (0..screen.row_count())
        .find(|&i| screen.render_row(i).unwrap().text == "walk dog")
        .unwrap();
    screen.delete_row(b_row).unwrap();

    assert_eq!(screen.row_count(), 1);
    assert_eq!(screen.render_row(0).unwrap().text, "buy milk");
    assert_eq!(repo.ids(), vec![a.id]);
}

#[test]
fn failed_store_delete_leaves_cache_untouched() {
    let repo = SharedRepo::default();
    repo.insert(Memo::new("sticky"));

    let mut screen = ListScreen::new(repo.clone());
    screen.on_appear().unwrap();

    repo.arm_delete_failure();
    let err = screen.delete_row(0).unwrap_err();
    assert!(matches!(err, ScreenError::Repo(_)));

    // Store write failed, so the cache must not have diverged from it.
    assert_eq!(screen.row_count(), 1);
    assert_eq!(repo.ids().len(), 1);

    // The next attempt goes through and both sides agree again.
    screen.delete_row(0).unwrap();
    assert_eq!(screen.row_count(), 0);
    assert!(repo.ids().is_empty());
}

#[test]
fn row_actions_out_of_range_are_guarded() {
    let repo = SharedRepo::default();
    repo.insert(Memo::new("only"));

    let mut screen = ListScreen::new(repo);
    screen.on_appear().unwrap();

    for result in [
        screen.render_row(1).map(|_| ()),
        screen.select_row(1).map(|_| ()),
    ] {
        assert!(matches!(
            result,
            Err(ScreenError::RowOutOfRange { index: 1, rows: 1 })
        ));
    }
    assert!(matches!(
        screen.delete_row(5),
        Err(ScreenError::RowOutOfRange { index: 5, rows: 1 })
    ));
}

// End-to-end against the real store: records A and B, one visibility event,
// delete B through the screen, store ends up with A only.
#[test]
fn sqlite_backed_scenario_delete_second_row() {
    let mut conn = open_db_in_memory().unwrap();

    let a = Memo::new("buy milk");
    let b = Memo::new("walk dog");
    {
        let repo = SqliteMemoRepository::try_new(&mut conn).unwrap();
        repo.create_memo(&a).unwrap();
        repo.create_memo(&b).unwrap();
    }

    let mut screen = ListScreen::new(SqliteMemoRepository::try_new(&mut conn).unwrap());
    screen.on_appear().unwrap();
    assert_eq!(screen.row_count(), 2);

    let b_row = (0..screen.row_count())
        .find(|&i| screen.render_row(i).unwrap().text == "walk dog")
        .unwrap();
    screen.delete_row(b_row).unwrap();
    assert_eq!(screen.row_count(), 1);
    assert_eq!(screen.render_row(0).unwrap().text, "buy milk");
    drop(screen);

    let repo = SqliteMemoRepository::try_new(&mut conn).unwrap();
    let remaining = repo.list_memos().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, a.id);
}
