use error_trail::{wrap, Chain, Frame, FrameResolver, FrameSnapshot};
use std::collections::HashMap;

struct MapResolver(HashMap<usize, Vec<Frame>>);

impl MapResolver {
    fn new() -> Self {
        let mut symbols = HashMap::new();
        symbols.insert(0x10, vec![Frame::new("app::handler::get", "src/handler.rs", 42)]);
        symbols.insert(0x20, vec![Frame::new("app::service::get", "src/service.rs", 30)]);
        symbols.insert(0x30, vec![Frame::new("app::store::load", "src/store.rs", 17)]);
        symbols.insert(0x40, vec![Frame::new("", "src/anonymous.rs", 1)]);
        Self(symbols)
    }
}

impl FrameResolver for MapResolver {
    fn symbolize(&self, ip: usize) -> Vec<Frame> {
        self.0.get(&ip).cloned().unwrap_or_default()
    }
}

fn node(op: &'static str, ip: usize, cause: Option<Chain>) -> Chain {
    let builder = Chain::wrap(op).frames(FrameSnapshot::from_addresses([ip, 0, 0], None));
    match cause {
        Some(cause) => builder.cause(cause).build(),
        None => builder.cause("leaf").build(),
    }
}

#[test]
fn stacktrace_lists_resolved_frames_outermost_first() {
    let err = node("handler", 0x10, Some(node("service", 0x20, Some(node("store", 0x30, None)))));

    let trace = err.stacktrace_with(&MapResolver::new());
    assert_eq!(
        trace,
        vec![
            Frame::new("app::handler::get", "src/handler.rs", 42),
            Frame::new("app::service::get", "src/service.rs", 30),
            Frame::new("app::store::load", "src/store.rs", 17),
        ]
    );
}

#[test]
fn stacktrace_omits_nodes_without_a_complete_frame() {
    let err = node(
        "handler",
        0x10,
        Some(node("unknown", 0x99, Some(node("anon", 0x40, Some(node("store", 0x30, None)))))),
    );

    let trace = err.stacktrace_with(&MapResolver::new());
    assert_eq!(err.depth(), 4);
    assert_eq!(trace.len(), 2);
    assert_eq!(trace[0].function, "app::handler::get");
    assert_eq!(trace[1].function, "app::store::load");
}

#[test]
fn empty_snapshots_contribute_nothing() {
    let err = Chain::wrap("op").cause("leaf").frames(FrameSnapshot::empty()).build();
    assert!(err.stacktrace_with(&MapResolver::new()).is_empty());
    assert!(err.stacktrace().is_empty());
}

#[test]
fn captured_frame_points_at_the_wrap_site() {
    let line = line!() + 1;
    let err = wrap!("op", cause("leaf"));

    let caller = err.frames().caller().expect("build records its caller");
    assert!(caller.file().replace('\\', "/").ends_with("tests/types/frames.rs"));
    assert_eq!(caller.line(), line);

    // Debug builds carry the symbols needed to name the wrapping function.
    #[cfg(debug_assertions)]
    {
        let trace = err.stacktrace();
        assert_eq!(trace.len(), 1, "{trace:?}");
        assert!(trace[0].function.ends_with("captured_frame_points_at_the_wrap_site"), "{}", trace[0].function);
        assert_eq!(trace[0].line, line);
        assert_eq!(trace[0].file, caller.file());
    }
}

fn load_user() -> Chain {
    wrap!("store.Load", cause("timeout"))
}

fn get_user() -> Chain {
    wrap!("handler.Get", cause(load_user()))
}

#[test]
#[cfg(debug_assertions)]
fn captured_frames_name_each_wrapping_function() {
    let trace = get_user().stacktrace();
    let functions: Vec<&str> = trace.iter().map(|frame| frame.function.as_str()).collect();

    assert_eq!(functions.len(), 2, "{functions:?}");
    assert!(functions[0].ends_with("get_user"));
    assert!(functions[1].ends_with("load_user"));
}

#[test]
fn captured_snapshot_is_bounded() {
    let err = Chain::wrap("op").build();
    assert!(err.frames().addresses().count() <= error_trail::types::MAX_ADDRESSES);
}
