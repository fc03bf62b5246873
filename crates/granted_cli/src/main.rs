//! GrantEd console application.
//!
//! # Responsibility
//! - Wire the SQLite-backed repositories and services.
//! - Drive the interactive menu loop on stdin/stdout.
//!
//! # Invariants
//! - Storage failures never crash the menu; services degrade them and
//!   the loop continues.
//! - Non-integer menu input discards the line and re-prompts.

use granted_core::{
    Database, ProgramService, ScoreService, SqliteProgramRepository, SqliteSubjectScoreRepository,
    SqliteUniversityRepository, SqliteUserRepository, UniversityService, UserService,
    TRANSCRIPT_SCORE_COUNT,
};
use std::io::{self, BufRead};

const MENU_LINE: &str = "*****************************************";

/// One line of console input, classified for menu handling.
enum Input {
    Number(i64),
    NotANumber,
    /// Stdin reached end of file or failed; the application exits.
    Closed,
}

struct GrantedApp<'db, In> {
    scores: ScoreService<SqliteSubjectScoreRepository<'db>>,
    users: UserService<SqliteUserRepository<'db, SqliteSubjectScoreRepository<'db>>>,
    programs: ProgramService<SqliteProgramRepository<'db>>,
    universities: UniversityService<SqliteUniversityRepository<'db, SqliteProgramRepository<'db>>>,
    input: In,
}

impl<'db, In: BufRead> GrantedApp<'db, In> {
    fn new(db: &'db Database, input: In) -> Self {
        Self {
            scores: ScoreService::new(SqliteSubjectScoreRepository::new(db)),
            users: UserService::new(SqliteUserRepository::new(
                db,
                SqliteSubjectScoreRepository::new(db),
            )),
            programs: ProgramService::new(SqliteProgramRepository::new(db)),
            universities: UniversityService::new(SqliteUniversityRepository::new(
                db,
                SqliteProgramRepository::new(db),
            )),
            input,
        }
    }

    fn run(&mut self) {
        loop {
            println!("{MENU_LINE}");
            println!("Welcome to GrantEd Application");
            println!("Select option: ");
            println!("1. Subject Score Menu");
            println!("2. User Menu");
            println!("3. Program Menu");
            println!("4. University Menu");
            println!("0. Exit application");

            match self.read_option("Enter option 1-4: ") {
                Input::Number(1) => {
                    if !self.subject_score_menu() {
                        break;
                    }
                }
                Input::Number(2) => {
                    if !self.user_menu() {
                        break;
                    }
                }
                Input::Number(3) => {
                    if !self.program_menu() {
                        break;
                    }
                }
                Input::Number(4) => {
                    if !self.university_menu() {
                        break;
                    }
                }
                Input::Number(0) | Input::Closed => break,
                Input::Number(_) => {}
                Input::NotANumber => println!("Input must be an integer"),
            }
        }
    }

    // Returns false once stdin is closed, so callers can unwind the
    // whole menu stack.
    fn subject_score_menu(&mut self) -> bool {
        loop {
            println!("{MENU_LINE}");
            println!("Subject Score Menu");
            println!("Select option: ");
            println!("1. Get All Subject Scores");
            println!("2. Get Subject Score By ID");
            println!("3. Create Subject Score");
            println!("0. Go back");

            match self.read_option("Enter option 1-3: ") {
                Input::Number(1) => self.all_subject_scores(),
                Input::Number(2) => {
                    if !self.subject_score_by_id() {
                        return false;
                    }
                }
                Input::Number(3) => {
                    if !self.create_subject_score() {
                        return false;
                    }
                }
                Input::Number(0) => return true,
                Input::Number(_) => {}
                Input::NotANumber => println!("Input must be an integer"),
                Input::Closed => return false,
            }
        }
    }

    fn all_subject_scores(&self) {
        println!("{MENU_LINE}");
        println!("All Subject Scores\n");

        for score in self.scores.get_all() {
            println!("{score}");
        }
    }

    fn subject_score_by_id(&mut self) -> bool {
        println!("{MENU_LINE}");
        println!("Enter id: ");

        match self.read_number() {
            Input::Number(id) => {
                match self.scores.get_by_id(id) {
                    Some(score) => println!("\n{score}"),
                    None => println!("\nSubject score not found"),
                }
                true
            }
            Input::NotANumber => {
                println!("Input must be integer");
                true
            }
            Input::Closed => false,
        }
    }

    fn create_subject_score(&mut self) -> bool {
        println!("{MENU_LINE}");
        println!("Enter subject name: ");
        let subject = match self.read_text() {
            Some(subject) => subject,
            None => return false,
        };

        println!("Enter subject score: ");
        match self.read_number() {
            Input::Number(score) => {
                if self.scores.create(&subject, score) {
                    println!("\nSubject score was created");
                } else {
                    println!("\nSubject score was not created");
                }
                true
            }
            Input::NotANumber => {
                println!("Subject name must be string");
                println!("Score must be integer");
                true
            }
            Input::Closed => false,
        }
    }

    fn user_menu(&mut self) -> bool {
        loop {
            println!("{MENU_LINE}");
            println!("User Menu");
            println!("Select option: ");
            println!("1. Get All Users");
            println!("2. Get User By ID");
            println!("3. Create User");
            println!("0. Go back");

            match self.read_option("Enter option 1-3: ") {
                Input::Number(1) => self.all_users(),
                Input::Number(2) => {
                    if !self.user_by_id() {
                        return false;
                    }
                }
                Input::Number(3) => {
                    if !self.create_user() {
                        return false;
                    }
                }
                Input::Number(0) => return true,
                Input::Number(_) => {}
                Input::NotANumber => println!("Input must be an integer"),
                Input::Closed => return false,
            }
        }
    }

    fn all_users(&self) {
        println!("{MENU_LINE}");
        println!("All Users\n");

        for user in self.users.get_all() {
            println!("{user}");
        }
    }

    fn user_by_id(&mut self) -> bool {
        println!("{MENU_LINE}");
        println!("Enter id: ");

        match self.read_number() {
            Input::Number(id) => {
                match self.users.get_by_id(id) {
                    Some(user) => println!("\n{user}"),
                    None => println!("\nUser not found"),
                }
                true
            }
            Input::NotANumber => {
                println!("Input must be integer");
                true
            }
            Input::Closed => false,
        }
    }

    fn create_user(&mut self) -> bool {
        println!("{MENU_LINE}");
        println!("Enter first name: ");
        let first_name = match self.read_text() {
            Some(name) => name,
            None => return false,
        };

        println!("Enter last name: ");
        let last_name = match self.read_text() {
            Some(name) => name,
            None => return false,
        };

        // A transcript is exactly five subject scores.
        let mut score_ids = Vec::with_capacity(TRANSCRIPT_SCORE_COUNT);
        for index in 1..=TRANSCRIPT_SCORE_COUNT {
            println!("Enter subject score id {index}: ");
            match self.read_number() {
                Input::Number(id) => score_ids.push(id),
                Input::NotANumber => {
                    println!("Input must be integer");
                    return true;
                }
                Input::Closed => return false,
            }
        }

        if self.users.create(&first_name, &last_name, &score_ids) {
            println!("\nUser was created");
        } else {
            println!("\nUser was not created");
        }
        true
    }

    fn program_menu(&mut self) -> bool {
        loop {
            println!("{MENU_LINE}");
            println!("Program Menu");
            println!("Select option: ");
            println!("1. Get All Programs");
            println!("2. Get Program By ID");
            println!("3. Create Program");
            println!("0. Go back");

            match self.read_option("Enter option 1-3: ") {
                Input::Number(1) => self.all_programs(),
                Input::Number(2) => {
                    if !self.program_by_id() {
                        return false;
                    }
                }
                Input::Number(3) => {
                    if !self.create_program() {
                        return false;
                    }
                }
                Input::Number(0) => return true,
                Input::Number(_) => {}
                Input::NotANumber => println!("Input must be an integer"),
                Input::Closed => return false,
            }
        }
    }

    fn all_programs(&self) {
        println!("{MENU_LINE}");
        println!("All Programs\n");

        for program in self.programs.get_all() {
            println!("{program}");
        }
    }

    fn program_by_id(&mut self) -> bool {
        println!("{MENU_LINE}");
        println!("Enter id: ");

        match self.read_number() {
            Input::Number(id) => {
                match self.programs.get_by_id(id) {
                    Some(program) => println!("\n{program}"),
                    None => println!("\nProgram not found"),
                }
                true
            }
            Input::NotANumber => {
                println!("Input must be integer");
                true
            }
            Input::Closed => false,
        }
    }

    fn create_program(&mut self) -> bool {
        println!("{MENU_LINE}");
        println!("Enter program name: ");
        let name = match self.read_text() {
            Some(name) => name,
            None => return false,
        };

        println!("Enter minimal score: ");
        match self.read_number() {
            Input::Number(min_score) => {
                if self.programs.create(&name, min_score) {
                    println!("\nProgram was created");
                } else {
                    println!("\nProgram was not created");
                }
                true
            }
            Input::NotANumber => {
                println!("Input must be integer");
                true
            }
            Input::Closed => false,
        }
    }

    fn university_menu(&mut self) -> bool {
        loop {
            println!("{MENU_LINE}");
            println!("University Menu");
            println!("Select option: ");
            println!("1. Get All Universities");
            println!("2. Get University By ID");
            println!("3. Create University");
            println!("0. Go back");

            match self.read_option("Enter option 1-3: ") {
                Input::Number(1) => self.all_universities(),
                Input::Number(2) => {
                    if !self.university_by_id() {
                        return false;
                    }
                }
                Input::Number(3) => {
                    if !self.create_university() {
                        return false;
                    }
                }
                Input::Number(0) => return true,
                Input::Number(_) => {}
                Input::NotANumber => println!("Input must be an integer"),
                Input::Closed => return false,
            }
        }
    }

    fn all_universities(&self) {
        println!("{MENU_LINE}");
        println!("All Universities\n");

        for university in self.universities.get_all() {
            println!("{university}");
        }
    }

    fn university_by_id(&mut self) -> bool {
        println!("{MENU_LINE}");
        println!("Enter id: ");

        match self.read_number() {
            Input::Number(id) => {
                match self.universities.get_by_id(id) {
                    Some(university) => println!("\n{university}"),
                    None => println!("\nUniversity not found"),
                }
                true
            }
            Input::NotANumber => {
                println!("Input must be integer");
                true
            }
            Input::Closed => false,
        }
    }

    fn create_university(&mut self) -> bool {
        println!("{MENU_LINE}");
        println!("Enter university name: ");
        let name = match self.read_text() {
            Some(name) => name,
            None => return false,
        };

        println!("Enter number of programs: ");
        let count = match self.read_number() {
            Input::Number(count) => count,
            Input::NotANumber => {
                println!("Input must be integer");
                return true;
            }
            Input::Closed => return false,
        };

        let mut program_ids = Vec::new();
        for index in 1..=count {
            println!("Enter program id {index}: ");
            match self.read_number() {
                Input::Number(id) => program_ids.push(id),
                Input::NotANumber => {
                    println!("Input must be integer");
                    return true;
                }
                Input::Closed => return false,
            }
        }

        if self.universities.create(&name, &program_ids) {
            println!("\nUniversity was created");
        } else {
            println!("\nUniversity was not created");
        }
        true
    }

    fn read_option(&mut self, prompt: &str) -> Input {
        println!("{prompt}");
        self.read_number()
    }

    fn read_number(&mut self) -> Input {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Input::Closed,
            Ok(_) => match line.trim().parse::<i64>() {
                Ok(value) => Input::Number(value),
                Err(_) => Input::NotANumber,
            },
            Err(_) => Input::Closed,
        }
    }

    fn read_text(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(_) => None,
        }
    }
}

fn main() {
    // Logging is best effort; the console stays usable without it.
    let log_dir = std::env::temp_dir().join("granted-logs");
    if let Err(err) = granted_core::init_logging(granted_core::default_log_level(), &log_dir) {
        eprintln!("logging unavailable: {err}");
    }

    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "granted.db".to_string());
    let db = match Database::open(&db_path) {
        Ok(db) => db,
        Err(err) => {
            eprintln!("cannot open database at `{db_path}`: {err}");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut app = GrantedApp::new(&db, stdin.lock());
    app.run();
}
