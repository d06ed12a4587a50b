use error_trail::{bail, wrap, ChainResult, FrameSnapshot, Kind, Level};

#[test]
fn wrap_macro_sets_every_field() {
    let attempts = 3;
    let err = wrap!(
        "sync.Push",
        cause("remote hung up"),
        message("push failed after {} attempts", attempts),
        kind(Kind::new(502)),
        level(Level::Alert),
    );

    assert_eq!(err.op(), "sync.Push");
    assert_eq!(err.message(), "push failed after 3 attempts");
    assert_eq!(err.kind(), Kind::new(502));
    assert_eq!(err.kind_text(), "Bad Gateway");
    assert_eq!(err.level(), Level::Alert);
    assert_eq!(err.to_string(), "remote hung up");
}

#[test]
fn wrap_macro_takes_a_prebuilt_message() {
    let reason = String::from("quota exceeded");
    let err = wrap!("sync.Push", cause("429"), message(reason));
    assert_eq!(err.message(), "quota exceeded");

    let user_id = 7;
    let err = wrap!("store.Load", message("user {user_id} not found"));
    assert_eq!(err.message(), "user 7 not found");

    let err = wrap!("store.Load", message("stale cache".to_string()));
    assert_eq!(err.message(), "stale cache");
}

#[test]
fn wrap_macro_with_only_an_operation() {
    let err = wrap!("noop");
    assert!(err.cause().is_none());
    assert_eq!(err.message(), "Internal Server Error");
}

#[test]
fn repeated_fields_keep_the_last_value() {
    let err = wrap!("op", kind(Kind::BAD_REQUEST), message("first"), kind(Kind::FORBIDDEN), message("second"));

    assert_eq!(err.kind(), Kind::FORBIDDEN);
    assert_eq!(err.message(), "second");
}

#[test]
fn wrap_macro_accepts_a_snapshot() {
    let err = wrap!("op", frames(FrameSnapshot::empty()));
    assert_eq!(err.frames(), &FrameSnapshot::empty());
}

#[test]
fn wrap_macro_captures_its_own_line() {
    let line = line!() + 1;
    let err = wrap!("op", cause("leaf"));
    assert_eq!(err.frames().caller().map(|location| location.line()), Some(line));
}

fn parse_port(raw: &str) -> ChainResult<u16> {
    let port: u16 = match raw.parse() {
        Ok(port) => port,
        Err(err) => bail!("config.ParsePort", cause(err), kind(Kind::BAD_REQUEST)),
    };
    if port == 0 {
        bail!("config.ParsePort", message("port must not be zero"), kind(Kind::BAD_REQUEST));
    }
    Ok(port)
}

#[test]
fn bail_returns_the_wrapped_error() {
    assert_eq!(parse_port("8080").unwrap(), 8080);

    let err = parse_port("http").unwrap_err();
    assert!(err.is(Kind::BAD_REQUEST));
    assert_eq!(err.to_string(), "invalid digit found in string");

    let err = parse_port("0").unwrap_err();
    assert_eq!(err.message(), "port must not be zero");
}
