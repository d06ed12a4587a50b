use error_trail::{Chain, Frame, FrameResolver, FrameSnapshot};

struct FixedResolver;

impl FrameResolver for FixedResolver {
    fn symbolize(&self, ip: usize) -> Vec<Frame> {
        match ip {
            0x100 => vec![Frame::new("app::handler::get", "src/handler.rs", 42)],
            0x200 => vec![Frame::new("app::store::load", "src/store.rs", 17)],
            _ => Vec::new(),
        }
    }
}

fn sample() -> Chain {
    let store = Chain::wrap("store.Load")
        .cause("no row for id 7")
        .frames(FrameSnapshot::from_addresses([0x200, 0, 0], None))
        .build();

    Chain::wrap("handler.Get")
        .cause(store)
        .message("user lookup failed")
        .frames(FrameSnapshot::from_addresses([0x100, 0, 0], None))
        .build()
}

#[test]
fn compact_detail_lists_every_layer_then_the_leaf() {
    let err = sample();
    let output = err.detailed().to_string();
    assert_eq!(output, "user lookup failed: (no message): no row for id 7");
}

#[test]
fn custom_separator() {
    let err = sample();
    let output = format!("{}", err.detailed().with_separator(" | "));
    assert_eq!(output, "user lookup failed | (no message) | no row for id 7");
}

#[test]
fn verbose_detail_places_frames_beneath_messages() {
    let err = sample();
    let output = err.detailed().verbose(true).with_resolver(&FixedResolver).to_string();

    let expected = "user lookup failed\n    app::handler::get\n        src/handler.rs:42\n\
                    (no message)\n    app::store::load\n        src/store.rs:17\n\
                    no row for id 7";
    assert_eq!(output, expected);
}

#[test]
fn verbose_detail_skips_unresolved_frames() {
    let err = Chain::wrap("op")
        .cause("leaf")
        .message("outer")
        .frames(FrameSnapshot::empty())
        .build();

    let output = err.detailed().verbose(true).with_resolver(&FixedResolver).to_string();
    assert_eq!(output, "outer\nleaf");
}

#[test]
fn detail_without_leaf_ends_at_the_last_node() {
    let err = Chain::wrap("op").frames(FrameSnapshot::empty()).build();
    assert_eq!(err.detailed().to_string(), "(no message)");
}

#[test]
fn alternate_display_is_the_verbose_detail() {
    let err = Chain::wrap("op")
        .cause("leaf")
        .message("outer")
        .frames(FrameSnapshot::empty())
        .build();

    assert_eq!(format!("{:#}", err), "outer\nleaf");
    assert_eq!(format!("{}", err), "leaf");
}
