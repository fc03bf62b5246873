use granted_core::{
    Database, QuestionRepository, QuestionService, QuestionServiceError, RepoError,
    SqliteChoiceRepository, SqliteQuestionRepository,
};
use rusqlite::params;

#[test]
fn registered_display_name_targets_normalized_table() {
    let db = Database::in_memory().unwrap();
    let repo = question_repo(&db);

    repo.add_subject("Computer Science", true).unwrap();
    let id = seed_question(
        &db,
        "computer_science",
        "What does CPU stand for?",
        "Central processing unit.",
        "[1]",
        &["Central processing unit", "Compact printing unit"],
    );

    // Display name, normalized name and mixed case all reach the same
    // table.
    for subject in ["Computer Science", "computer_science", "computer science"] {
        let question = repo.get_question(subject, id).unwrap().unwrap();
        assert_eq!(question.question_text, "What does CPU stand for?");
        assert_eq!(question.choices.len(), 2);
    }
}

#[test]
fn unknown_subject_fails_before_table_access() {
    let db = Database::in_memory().unwrap();
    let repo = question_repo(&db);

    repo.add_subject("History", false).unwrap();

    let err = repo.get_question("Alchemy", 1).unwrap_err();
    assert!(matches!(err, RepoError::InvalidSubject(subject) if subject == "Alchemy"));

    let err = repo.get_all_subject_questions("Alchemy", false).unwrap_err();
    assert!(matches!(err, RepoError::InvalidSubject(_)));
}

#[test]
fn add_subject_rejects_core_table_names() {
    let db = Database::in_memory().unwrap();
    let repo = question_repo(&db);

    for subject in ["users", "subjects", "Subject Scores"] {
        assert!(matches!(
            repo.add_subject(subject, false),
            Err(RepoError::InvalidSubject(_))
        ));
    }
}

#[test]
fn add_subject_is_idempotent() {
    let db = Database::in_memory().unwrap();
    let repo = question_repo(&db);

    repo.add_subject("History", false).unwrap();
    repo.add_subject("History", false).unwrap();

    assert_eq!(repo.get_subject_names(false).unwrap(), ["History"]);
}

#[test]
fn reserved_prefix_subject_is_never_registered() {
    let db = Database::in_memory().unwrap();
    let repo = question_repo(&db);

    assert!(matches!(
        repo.add_subject("sqlite_stats", false),
        Err(RepoError::InvalidSubject(_))
    ));

    // The rejected name must not linger on the allowlist: listing skips
    // it and read paths still treat it as unknown.
    assert!(repo.get_subject_names(false).unwrap().is_empty());
    let err = repo.get_question("sqlite_stats", 1).unwrap_err();
    assert!(matches!(err, RepoError::InvalidSubject(_)));
}

#[test]
fn re_registering_a_subject_updates_the_elective_flag() {
    let db = Database::in_memory().unwrap();
    let repo = question_repo(&db);

    repo.add_subject("History", false).unwrap();
    repo.add_subject("History", true).unwrap();

    assert_eq!(repo.get_subject_names(true).unwrap(), ["History"]);
    assert!(repo.get_subject_names(false).unwrap().is_empty());
}

#[test]
fn single_and_multi_answer_questions_partition() {
    let db = Database::in_memory().unwrap();
    let repo = question_repo(&db);

    repo.add_subject("History", false).unwrap();
    seed_question(
        &db,
        "history",
        "When did WW2 end?",
        "1945.",
        "[2]",
        &["1944", "1945", "1946"],
    );
    seed_question(
        &db,
        "history",
        "Which countries were Allied powers?",
        "The UK and the USSR.",
        "[1, 3]",
        &["United Kingdom", "Italy", "Soviet Union"],
    );

    let single = repo.get_all_subject_questions("History", false).unwrap();
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].question_text, "When did WW2 end?");
    assert!(!single[0].is_multi_answer());

    let multi = repo.get_all_subject_questions("History", true).unwrap();
    assert_eq!(multi.len(), 1);
    assert!(multi[0].is_multi_answer());
    assert_eq!(multi[0].correct_choice_count(), 2);
}

#[test]
fn choice_correctness_follows_position_membership() {
    let db = Database::in_memory().unwrap();
    let repo = question_repo(&db);

    repo.add_subject("History", false).unwrap();
    let id = seed_question(
        &db,
        "history",
        "Which countries were Allied powers?",
        "The UK and the USSR.",
        "[1, 3]",
        &["United Kingdom", "Italy", "Soviet Union"],
    );

    let question = repo.get_question("History", id).unwrap().unwrap();
    let flags: Vec<_> = question
        .choices
        .iter()
        .map(|choice| choice.is_correct)
        .collect();
    assert_eq!(flags, [true, false, true]);
    assert_eq!(question.choices[0].choice_text, "United Kingdom");
}

#[test]
fn question_without_choice_rows_is_absent() {
    let db = Database::in_memory().unwrap();
    let repo = question_repo(&db);

    repo.add_subject("History", false).unwrap();
    let orphan = seed_question(&db, "history", "No options here?", "None.", "[1]", &[]);
    seed_question(
        &db,
        "history",
        "When did WW2 end?",
        "1945.",
        "[2]",
        &["1944", "1945"],
    );

    assert_eq!(repo.get_question("History", orphan).unwrap(), None);

    let listed = repo.get_all_subject_questions("History", false).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].question_text, "When did WW2 end?");
}

#[test]
fn malformed_correct_choices_is_invalid_data() {
    let db = Database::in_memory().unwrap();
    let repo = question_repo(&db);

    repo.add_subject("History", false).unwrap();
    let id = seed_question(
        &db,
        "history",
        "When did WW2 end?",
        "1945.",
        "not json",
        &["1944", "1945"],
    );

    let err = repo.get_question("History", id).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn subject_names_filter_on_elective_flag() {
    let db = Database::in_memory().unwrap();
    let repo = question_repo(&db);

    repo.add_subject("Computer Science", true).unwrap();
    repo.add_subject("History", false).unwrap();
    repo.add_subject("Math", false).unwrap();

    assert_eq!(repo.get_subject_names(true).unwrap(), ["Computer Science"]);
    assert_eq!(repo.get_subject_names(false).unwrap(), ["History", "Math"]);
}

#[test]
fn service_propagates_invalid_subject_and_wraps_lookups() {
    let db = Database::in_memory().unwrap();
    let repo = question_repo(&db);
    repo.add_subject("History", false).unwrap();
    let id = seed_question(
        &db,
        "history",
        "When did WW2 end?",
        "1945.",
        "[2]",
        &["1944", "1945"],
    );

    let service = QuestionService::new(question_repo(&db));

    assert!(matches!(
        service.get_question("Alchemy", 1),
        Err(QuestionServiceError::InvalidSubject(subject)) if subject == "Alchemy"
    ));

    let question = service.get_question("History", id).unwrap().unwrap();
    assert_eq!(question.explanation, "1945.");
    assert_eq!(service.get_subject_names(false), ["History"]);
}

fn question_repo(db: &Database) -> SqliteQuestionRepository<'_, SqliteChoiceRepository<'_>> {
    SqliteQuestionRepository::new(db, SqliteChoiceRepository::new(db))
}

fn seed_question(
    db: &Database,
    table: &str,
    question_text: &str,
    explanation: &str,
    correct_choices: &str,
    choices: &[&str],
) -> i64 {
    let conn = db.connect().unwrap();
    conn.execute(
        &format!(
            "INSERT INTO \"{table}\" (question_text, explanation, correct_choices)
             VALUES (?1, ?2, ?3);"
        ),
        params![question_text, explanation, correct_choices],
    )
    .unwrap();
    let id = conn.last_insert_rowid();

    for (index, choice_text) in choices.iter().enumerate() {
        conn.execute(
            "INSERT INTO choices (subject, question_id, position, choice_text)
             VALUES (?1, ?2, ?3, ?4);",
            params![table, id, (index + 1) as i64, choice_text],
        )
        .unwrap();
    }

    id
}
