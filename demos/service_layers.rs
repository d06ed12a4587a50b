//! A three-layer lookup that fails in the store, annotated on the way up.
//!
//! Run with `cargo run --example service_layers`.

use error_trail::prelude::*;
use std::collections::HashMap;
use std::io;

struct Store {
    rows: HashMap<u64, String>,
}

impl Store {
    fn load(&self, id: u64) -> ChainResult<String> {
        match self.rows.get(&id) {
            Some(row) => Ok(row.clone()),
            None => bail!(
                "store.Load",
                cause(io::Error::new(io::ErrorKind::NotFound, format!("no row for id {id}"))),
                kind(Kind::NOT_FOUND),
            ),
        }
    }
}

fn service_get(store: &Store, id: u64) -> ChainResult<String> {
    store.load(id).op("service.Get")
}

fn handler_get(store: &Store, id: u64) -> ChainResult<String> {
    service_get(store, id).op_with("handler.Get", |node| {
        node.message("user lookup failed").level(Level::Info)
    })
}

fn main() {
    let store = Store { rows: HashMap::from([(1, "alice".to_string())]) };

    match handler_get(&store, 1) {
        Ok(name) => println!("found {name}"),
        Err(err) => println!("unexpected: {err}"),
    }

    let Err(err) = handler_get(&store, 2) else {
        return;
    };

    println!("kind:       {}", err.kind());
    println!("level:      {}", err.level());
    println!("message:    {}", err.message());
    println!("operations: {:?}", err.operations());
    println!("display:    {}", err);
    println!("stacktrace:");
    for frame in err.stacktrace() {
        println!("  {frame}");
    }
    println!("detailed:\n{:#}", err);
}
