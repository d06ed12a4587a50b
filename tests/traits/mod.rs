use error_trail::traits::ResultExt;
use error_trail::{Cause, ChainResult, Kind, Level};
use std::io;

fn read_row(id: u64) -> Result<String, io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, format!("no row for id {id}")))
}

fn store_load(id: u64) -> ChainResult<String> {
    read_row(id).op_with("store.Load", |node| node.kind(Kind::NOT_FOUND))
}

fn service_load(id: u64) -> ChainResult<String> {
    store_load(id).op("service.Load")
}

fn handler_get(id: u64) -> ChainResult<String> {
    service_load(id).op_with("handler.Get", |node| {
        node.message("user lookup failed").level(Level::Info)
    })
}

#[test]
fn op_wraps_errors_layer_by_layer() {
    let err = handler_get(7).unwrap_err();

    assert_eq!(err.operations().as_slice(), ["handler.Get", "service.Load", "store.Load"]);
    assert_eq!(err.kind(), Kind::NOT_FOUND);
    assert_eq!(err.level(), Level::Info);
    assert_eq!(err.message(), "user lookup failed");
    assert_eq!(err.to_string(), "no row for id 7");
}

#[test]
fn op_passes_success_through() {
    let ok: Result<u8, io::Error> = Ok(3);
    assert_eq!(ok.op("noop").unwrap(), 3);
}

#[test]
fn op_with_closure_only_runs_on_error() {
    let mut called = false;
    let ok: Result<u8, io::Error> = Ok(1);
    let _ = ok.op_with("noop", |node| {
        called = true;
        node
    });
    assert!(!called);
}

#[test]
fn string_errors_become_leaves() {
    let result: Result<(), String> = Err("bad input".to_string());
    let err = result.op("parse").unwrap_err();

    assert!(matches!(err.cause(), Some(Cause::Leaf(_))));
    assert_eq!(err.to_string(), "bad input");
    assert_eq!(err.depth(), 1);
}

#[test]
fn op_records_the_calling_line() {
    let line = line!() + 1;
    let err = read_row(1).op("store.Load").unwrap_err();

    let caller = err.frames().caller().expect("caller location");
    assert_eq!(caller.line(), line);
    assert!(caller.file().replace('\\', "/").ends_with("tests/traits/mod.rs"));
}
