use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn domdef_cmd() -> Command {
    Command::cargo_bin("domdef").expect("domdef binary is built")
}

#[test]
fn rewrites_definitions_to_stdout_by_default() {
    let fixture = fixture_path("adk.dom");

    domdef_cmd()
        .arg(&fixture)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("# offset = 0\n")
                .and(predicate::str::contains("LID           122    159\n"))
                .and(predicate::str::contains("@mobile       (NMP | LID)\n")),
        );
}

#[test]
fn writes_every_requested_output() {
    let fixture = fixture_path("adk.dom");
    let dir = tempfile::tempdir().expect("temp dir");
    let out = |name: &str| dir.path().join(name);

    domdef_cmd()
        .arg(&fixture)
        .args(["-n", "-2"])
        .arg("-f")
        .arg(out("adk.out"))
        .arg("-t")
        .arg(out("adk.tcl"))
        .arg("-b")
        .arg(out("adk.bendix"))
        .arg("-p")
        .arg(out("adk.pml"))
        .arg("-c")
        .arg(out("adk.str"))
        .arg("-x")
        .arg(out("adk.xvg"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Load macros with 'source"));

    let tcl = fs::read_to_string(out("adk.tcl")).expect("vmd output");
    assert!(tcl.contains("atomselect macro CORE {resid 1 to 27}\n"));
    assert!(tcl.contains("atomselect macro rigid { not (NMP  or  LID)}\n"));
    assert!(tcl.contains("  set selections \"CORE NMP CORE2 LID CORE3\"\n"));

    let charmm = fs::read_to_string(out("adk.str")).expect("charmm output");
    assert!(charmm.contains("define LID      select resid 120 : 157  end\n"));
    assert!(charmm.contains("define hinge_nmp select NMP .and. (CORE .or. CORE2)  end\n"));

    let pymol = fs::read_to_string(out("adk.pml")).expect("pymol output");
    assert!(pymol.contains("select CORE3, polymer and resi 158-212\n"));

    let bendix = fs::read_to_string(out("adk.bendix")).expect("bendix output");
    assert_eq!(bendix, "1 27 28 57 58 119 120 157 158 212\n");

    let xvg = fs::read_to_string(out("adk.xvg")).expect("xvg output");
    assert_eq!(xvg.matches("&\n").count(), 1);
    assert!(xvg.ends_with("  212  0\n"));

    let rewritten = fs::read_to_string(out("adk.out")).expect("domdef output");
    assert!(rewritten.contains("# offset = -2\n"));
}

#[test]
fn vmd_style_flags_reach_the_script() {
    let fixture = fixture_path("adk.dom");
    let dir = tempfile::tempdir().expect("temp dir");
    let tcl = dir.path().join("adk.tcl");

    domdef_cmd()
        .arg(&fixture)
        .args(["-f", "-", "--vmd-color", "3", "--vmd-rep", "NewRibbons"])
        .arg("--vmd")
        .arg(&tcl)
        .assert()
        .success();

    let script = fs::read_to_string(&tcl).expect("vmd output");
    assert!(script.contains(
        "proc addrep_domains {{color 3} {material AOChalky} {representation NewRibbons}} {\n"
    ));
}

#[test]
fn malformed_input_fails_without_outputs() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("bad.dom");
    let tcl = dir.path().join("bad.tcl");
    fs::write(&input, "CORE 1 29\nNMP 30\n").expect("write input");

    domdef_cmd()
        .arg(&input)
        .arg("-t")
        .arg(&tcl)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));

    assert!(!tcl.exists());
}

#[test]
fn compounds_only_input_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("compounds.dom");
    fs::write(&input, "@all A | B\n").expect("write input");

    domdef_cmd()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no domains defined"));
}

#[test]
fn missing_input_is_a_usage_error() {
    domdef_cmd().assert().failure().code(2);
}

#[test]
fn unreadable_input_reports_path() {
    domdef_cmd()
        .arg("does-not-exist.dom")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.dom"));
}
