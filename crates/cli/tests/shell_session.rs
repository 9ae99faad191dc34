//! Scripted shell sessions against a real database.

use sift_cli::Shell;
use sift_database::Database;
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn session(db: &Database, script: &str) -> String {
    let mut shell = Shell::new(db, Vec::new());
    shell.run(Cursor::new(script.to_string())).unwrap();
    String::from_utf8(shell.into_output()).unwrap()
}

#[test]
fn test_load_query_list_drop() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("sales.csv");
    let yaml = dir.path().join("sales.yaml");
    fs::write(&csv, "Region;Total\nAfrica;10\nUSA;20\nEngland;30\n").unwrap();
    fs::write(&yaml, "name: sales\nfields:\n  - name: Region\n    type: string\n").unwrap();

    let db = Database::default();
    let script = format!(
        "\\load {} {}\n\nselect * from sales;\n\\list\n\\drop sales\n\\list\n\\q\nselect * from sales;\n",
        csv.display(),
        yaml.display()
    );
    let out = session(&db, &script);

    let expected = "~# ~# ~# ┌─────────┐\n\
                    │ REGION  │\n\
                    ├─────────┤\n\
                    │ Africa  │\n\
                    │ USA     │\n\
                    │ England │\n\
                    └─────────┘\n\
                    ~# sales\n\
                    ~# ~# ~# Bye-bye!\n";
    assert_eq!(out, expected);
    assert_eq!(db.table_count(), 0);
}

#[test]
fn test_errors_keep_the_loop_running() {
    let db = Database::default();
    let out = session(&db, "\\load only-one-arg\nselect * from t where 1;\n");
    assert_eq!(
        out,
        "~# error: wrong syntax for \\load: '\\load only-one-arg'\n\
         ~# error: Syntax error: invalid where format: expression reduces to 0 conditions instead of one\n\
         ~# \nBye-bye!\n"
    );
}
