use pty_relay::pty::PtySpawnConfig;
use std::ffi::{OsStr, OsString};

fn config(argv: &[&str]) -> PtySpawnConfig {
    PtySpawnConfig::new(argv.iter().map(OsString::from).collect(), "xterm-256color")
        .expect("non-empty argv")
}

fn os(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

#[test]
fn empty_command_line_is_rejected() {
    assert!(PtySpawnConfig::new(Vec::new(), "xterm-256color").is_none());
}

#[test]
fn argv_is_passed_verbatim() {
    let cfg = config(&["vim", "--clean", "-n", "a b"]);
    assert_eq!(cfg.command().get_argv(), &os(&["vim", "--clean", "-n", "a b"]));
    assert_eq!(cfg.argv(), os(&["vim", "--clean", "-n", "a b"]).as_slice());
}

#[test]
fn program_is_argument_zero() {
    let cfg = config(&["/usr/bin/python3", "-q"]);
    assert_eq!(cfg.program(), "/usr/bin/python3");
}

#[cfg(unix)]
#[test]
fn non_utf8_arguments_survive() {
    use std::os::unix::ffi::OsStringExt;

    let raw = OsString::from_vec(vec![b'f', 0xff, b'o']);
    let cfg = PtySpawnConfig::new(vec![OsString::from("cat"), raw.clone()], "xterm").unwrap();
    assert_eq!(cfg.command().get_argv()[1], raw);
}

#[test]
fn exports_term() {
    let cfg = config(&["sh"]);
    assert_eq!(cfg.command().get_env("TERM"), Some(OsStr::new("xterm-256color")));
}

#[test]
fn runs_in_current_directory() {
    let cfg = config(&["sh"]);
    let cwd = std::env::current_dir().unwrap();
    assert_eq!(cfg.command().get_cwd(), Some(&cwd.into_os_string()));
}
