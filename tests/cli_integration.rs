use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const TWO_SNIPPETS: &str = "---\n\
                            id: go-hello\n\
                            language: go\n\
                            tags: hello,cli\n\
                            description: print a greeting\n\
                            ---\n\
                            fmt.Println(\"hi\")\n\
                            ---\n\
                            id: py-hello\n\
                            language: python\n\
                            tags: hello\n\
                            ---\n\
                            print(\"hi\")\n";

struct Env {
    root: tempfile::TempDir,
    home: tempfile::TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
            home: tempfile::tempdir().unwrap(),
        }
    }

    fn write(&self, name: &str, contents: &str) {
        let path = self.root.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("snips").unwrap();
        cmd.env("SNIPS_PATH", self.root.path())
            .env("SNIPS_HOME", self.home.path());
        cmd
    }
}

#[test]
fn test_get_lists_all_snippets_with_id_headers() {
    let env = Env::new();
    env.write("hello.snipe", TWO_SNIPPETS);

    env.cmd()
        .arg("get")
        .assert()
        .success()
        .stdout(predicate::str::contains("[go-hello]"))
        .stdout(predicate::str::contains("fmt.Println(\"hi\")"))
        .stdout(predicate::str::contains("[py-hello]"))
        .stdout(predicate::str::contains("print(\"hi\")"));
}

#[test]
fn test_get_by_language_prints_body_without_header() {
    let env = Env::new();
    env.write("hello.snipe", TWO_SNIPPETS);

    env.cmd()
        .arg("get")
        .arg("--lang")
        .arg("go")
        .assert()
        .success()
        .stdout(predicate::str::contains("fmt.Println(\"hi\")"))
        .stdout(predicate::str::contains("[go-hello]").not())
        .stdout(predicate::str::contains("print(\"hi\")").not());
}

#[test]
fn test_get_by_tags_requires_all_tags() {
    let env = Env::new();
    env.write("hello.snipe", TWO_SNIPPETS);

    // Both snippets carry "hello", only one carries "cli" as well.
    env.cmd()
        .arg("get")
        .arg("--tags")
        .arg("hello,cli")
        .assert()
        .success()
        .stdout(predicate::str::contains("fmt.Println(\"hi\")"))
        .stdout(predicate::str::contains("print(\"hi\")").not());
}

#[test]
fn test_get_desc_prints_description_and_ruler() {
    let env = Env::new();
    env.write("hello.snipe", TWO_SNIPPETS);

    env.cmd()
        .arg("get")
        .arg("--lang")
        .arg("go")
        .arg("--desc")
        .assert()
        .success()
        .stdout(predicate::str::contains("description: print a greeting"))
        .stdout(predicate::str::contains("------"));
}

#[test]
fn test_last_refetches_by_ordinal() {
    let env = Env::new();
    env.write("hello.snipe", TWO_SNIPPETS);

    env.cmd().arg("get").assert().success();

    env.cmd()
        .arg("last")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("print(\"hi\")"))
        .stdout(predicate::str::contains("fmt.Println").not());
}

#[test]
fn test_last_beyond_result_count_fails() {
    let env = Env::new();
    env.write("hello.snipe", TWO_SNIPPETS);

    env.cmd().arg("get").assert().success();

    env.cmd()
        .arg("last")
        .arg("3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no result number 3"));
}

#[test]
fn test_export_writes_single_match_body() {
    let env = Env::new();
    env.write("hello.snipe", TWO_SNIPPETS);
    let out = env.home.path().join("hello.go");

    env.cmd()
        .arg("export")
        .arg(&out)
        .arg("--lang")
        .arg("go")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "fmt.Println(\"hi\")\n"
    );
}

#[test]
fn test_export_refuses_multiple_matches() {
    let env = Env::new();
    env.write("hello.snipe", TWO_SNIPPETS);
    let out = env.home.path().join("out.txt");

    env.cmd()
        .arg("export")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than one"));
    assert!(!out.exists());
}

#[test]
fn test_export_refuses_empty_selection() {
    let env = Env::new();
    env.write("hello.snipe", TWO_SNIPPETS);
    let out = env.home.path().join("out.txt");

    env.cmd()
        .arg("export")
        .arg(&out)
        .arg("--lang")
        .arg("fortran")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no snippet matched"));
    assert!(!out.exists());
}

#[test]
fn test_first_touch_backfills_ids_and_keeps_backup() {
    let env = Env::new();
    let original = "---\nlanguage: go\n---\nfmt.Println(\"hi\")\n";
    env.write("bare.snipe", original);

    env.cmd().arg("get").assert().success();

    let file = env.root.path().join("bare.snipe");
    let backup = env.root.path().join("bare.snipe.bk");
    assert_eq!(fs::read_to_string(&backup).unwrap(), original);
    assert!(fs::read_to_string(&file).unwrap().contains("id: "));
}

#[test]
fn test_second_touch_is_a_noop_on_disk() {
    let env = Env::new();
    env.write("bare.snipe", "---\nlanguage: go\n---\nfmt.Println(\"hi\")\n");

    env.cmd().arg("get").assert().success();

    let file = env.root.path().join("bare.snipe");
    let backup = env.root.path().join("bare.snipe.bk");
    let healed = fs::read(&file).unwrap();
    fs::remove_file(&backup).unwrap();

    env.cmd().arg("get").assert().success();

    assert_eq!(fs::read(&file).unwrap(), healed);
    assert!(!backup.exists());
}

#[test]
fn test_discovery_recurses_and_respects_exclude_flag() {
    let env = Env::new();
    env.write("sub/dir/deep.snipe", TWO_SNIPPETS);
    env.write("scratch.snipe", "---\nid: scratch\nlanguage: go\n---\nignore me\n");

    env.cmd()
        .arg("get")
        .arg("--lang")
        .arg("go")
        .arg("-x")
        .arg("scratch.snipe")
        .assert()
        .success()
        .stdout(predicate::str::contains("fmt.Println(\"hi\")"))
        .stdout(predicate::str::contains("ignore me").not());
}

#[test]
fn test_malformed_front_matter_names_file_and_line() {
    let env = Env::new();
    env.write("bad.snipe", "---\nlanguage go\n---\nbody\n");

    env.cmd()
        .arg("get")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.snipe"))
        .stderr(predicate::str::contains(":2:"));
}

#[test]
fn test_missing_snippets_root_is_reported() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("snips").unwrap();
    cmd.env_remove("SNIPS_PATH")
        .env("SNIPS_HOME", home.path())
        .arg("get")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no snippets directory configured"));
}
