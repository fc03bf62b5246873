use granted_core::{
    Database, ProgramRepository, ScoreId, SqliteProgramRepository, SqliteSubjectScoreRepository,
    SqliteUniversityRepository, SqliteUserRepository, SubjectScoreRepository, UniversityRepository,
    UniversityService, UserRepository, UserService,
};

#[test]
fn user_round_trips_with_resolved_transcript() {
    let db = Database::in_memory().unwrap();
    let repo = user_repo(&db);

    let transcript = seed_transcript(&db);
    let id = repo.create("Ada", "Lovelace", &transcript).unwrap();

    let user = repo.get_by_id(id).unwrap().unwrap();
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.last_name, "Lovelace");
    assert_eq!(user.scores.len(), 5);
    assert_eq!(user.total_score(), 90 + 85 + 70 + 88 + 74);

    let last = repo.get_last_created().unwrap().unwrap();
    assert_eq!(last.id, id);
}

#[test]
fn user_with_incomplete_transcript_is_absent() {
    let db = Database::in_memory().unwrap();
    let repo = user_repo(&db);

    let transcript = seed_transcript(&db);
    let short = repo.create("Brief", "Record", &transcript[..4]).unwrap();
    let complete = repo.create("Full", "Record", &transcript).unwrap();

    assert_eq!(repo.get_by_id(short).unwrap(), None);

    let all = repo.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, complete);
}

#[test]
fn user_referencing_missing_score_is_absent() {
    let db = Database::in_memory().unwrap();
    let repo = user_repo(&db);

    let mut transcript = seed_transcript(&db);
    transcript[4] = 9999;
    let id = repo.create("Gap", "Record", &transcript).unwrap();

    assert_eq!(repo.get_by_id(id).unwrap(), None);
}

#[test]
fn program_batch_uses_count_match() {
    let db = Database::in_memory().unwrap();
    let repo = SqliteProgramRepository::new(&db);

    let first = repo.create("Computer Science", 350).unwrap();
    let second = repo.create("Mathematics", 320).unwrap();
    repo.create("Physics", 300).unwrap();

    // Unlike transcripts, a program batch resolves for any requested
    // count, as long as every id was found.
    let both = repo.get_all_by_ids(&[first, second]).unwrap().unwrap();
    assert_eq!(both.len(), 2);
    assert_eq!(both[0].name, "Computer Science");
    assert_eq!(both[0].min_score, 350);

    assert_eq!(repo.get_all_by_ids(&[first, 9999]).unwrap(), None);
}

#[test]
fn program_crud_round_trips() {
    let db = Database::in_memory().unwrap();
    let repo = SqliteProgramRepository::new(&db);

    assert!(repo.get_all().unwrap().is_empty());
    assert_eq!(repo.get_by_id(7).unwrap(), None);

    let id = repo.create("Computer Science", 350).unwrap();
    assert!(id >= 1);

    let last = repo.get_last_created().unwrap().unwrap();
    assert_eq!(last.name, "Computer Science");
}

#[test]
fn university_resolves_every_referenced_program() {
    let db = Database::in_memory().unwrap();
    let programs = SqliteProgramRepository::new(&db);
    let repo = university_repo(&db);

    let cs = programs.create("Computer Science", 350).unwrap();
    let math = programs.create("Mathematics", 320).unwrap();

    let id = repo.create("KBTU", &[cs, math]).unwrap();
    let university = repo.get_by_id(id).unwrap().unwrap();
    assert_eq!(university.name, "KBTU");
    assert_eq!(university.programs.len(), 2);
    assert_eq!(university.programs[1].name, "Mathematics");
}

#[test]
fn university_with_missing_program_is_absent() {
    let db = Database::in_memory().unwrap();
    let programs = SqliteProgramRepository::new(&db);
    let repo = university_repo(&db);

    let cs = programs.create("Computer Science", 350).unwrap();
    let broken = repo.create("Ghost University", &[cs, 9999]).unwrap();
    let sound = repo.create("KBTU", &[cs]).unwrap();

    assert_eq!(repo.get_by_id(broken).unwrap(), None);

    let all = repo.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, sound);
}

#[test]
fn university_without_programs_resolves_empty() {
    let db = Database::in_memory().unwrap();
    let repo = university_repo(&db);

    let id = repo.create("Open University", &[]).unwrap();

    let university = repo.get_by_id(id).unwrap().unwrap();
    assert!(university.programs.is_empty());

    let last = repo.get_last_created().unwrap().unwrap();
    assert_eq!(last.id, id);
}

#[test]
fn services_wrap_aggregate_repositories() {
    let db = Database::in_memory().unwrap();
    let users = UserService::new(user_repo(&db));
    let universities = UniversityService::new(university_repo(&db));

    let transcript = seed_transcript(&db);
    assert!(users.create("Ada", "Lovelace", &transcript));
    assert!(!users.create("", "Lovelace", &transcript));

    let created = users.get_last_created().unwrap();
    assert_eq!(created.first_name, "Ada");

    assert!(universities.create("KBTU", &[]));
    assert_eq!(universities.get_all().len(), 1);
}

type UserRepo<'db> = SqliteUserRepository<'db, SqliteSubjectScoreRepository<'db>>;
type UniversityRepo<'db> = SqliteUniversityRepository<'db, SqliteProgramRepository<'db>>;

fn user_repo(db: &Database) -> UserRepo<'_> {
    SqliteUserRepository::new(db, SqliteSubjectScoreRepository::new(db))
}

fn university_repo(db: &Database) -> UniversityRepo<'_> {
    SqliteUniversityRepository::new(db, SqliteProgramRepository::new(db))
}

fn seed_transcript(db: &Database) -> Vec<ScoreId> {
    let scores = SqliteSubjectScoreRepository::new(db);
    [
        ("Math", 90),
        ("Physics", 85),
        ("History", 70),
        ("Biology", 88),
        ("Chemistry", 74),
    ]
    .into_iter()
    .map(|(subject, score)| scores.create(subject, score).unwrap())
    .collect()
}
