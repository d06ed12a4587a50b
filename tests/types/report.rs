use error_trail::{Chain, Frame, FrameResolver, FrameSnapshot, Kind, Level, Report};
use std::io;

struct OneFrame;

impl FrameResolver for OneFrame {
    fn symbolize(&self, ip: usize) -> Vec<Frame> {
        if ip == 0x1 {
            vec![Frame::new("app::orders::cancel", "src/orders.rs", 88)]
        } else {
            Vec::new()
        }
    }
}

fn cancel_error() -> Chain {
    Chain::wrap("orders.Cancel")
        .cause(Chain::wrap("orders.Load").cause("order already shipped").build())
        .message("cannot cancel order")
        .kind(Kind::BAD_REQUEST)
        .level(Level::Notice)
        .frames(FrameSnapshot::from_addresses([0x1, 0, 0], None))
        .build()
}

#[test]
fn report_captures_every_resolved_facet() {
    let report = Report::with_resolver(&cancel_error(), &OneFrame);

    assert_eq!(report.operations, ["orders.Cancel", "orders.Load"]);
    assert_eq!(report.kind, Kind::BAD_REQUEST);
    assert_eq!(report.kind_text, "Bad Request");
    assert_eq!(report.level, Level::Notice);
    assert_eq!(report.message, "cannot cancel order");
    assert_eq!(report.error, "order already shipped");
    assert_eq!(report.stacktrace, vec![Frame::new("app::orders::cancel", "src/orders.rs", 88)]);
}

#[test]
fn report_of_a_plain_error_uses_defaults() {
    let err = io::Error::other("socket closed");
    let report = Report::from_error(&err);

    assert!(report.operations.is_empty());
    assert_eq!(report.kind, Kind::UNEXPECTED);
    assert_eq!(report.level, Level::Error);
    assert_eq!(report.message, "socket closed");
    assert_eq!(report.error, "socket closed");
    assert!(report.stacktrace.is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn report_serializes_to_json() {
    let report = Report::with_resolver(&cancel_error(), &OneFrame);
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["kind"], 400);
    assert_eq!(json["level"], "NOTICE");
    assert_eq!(json["operations"][1], "orders.Load");
    assert_eq!(json["stacktrace"][0]["line"], 88);

    let back: Report = serde_json::from_value(json).expect("report deserializes");
    assert_eq!(back, report);
}
