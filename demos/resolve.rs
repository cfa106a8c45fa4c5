use std::error::Error;

use terminfo_caps::{Resolver, Source};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut resolver = Resolver::new();
    let caps = resolver.resolve_from_env()?;
    match caps.source() {
        Source::Database => println!("Capabilities from terminfo database"),
        Source::Builtin(name) => println!("Capabilities from builtin table for {name}"),
    }

    for (key, sequence) in caps.keys() {
        println!("{key:?} ({}) = {}", key.terminfo_name(), sequence.escape_ascii());
    }
    for (func, sequence) in caps.funcs() {
        println!("{func:?} ({}) = {}", func.terminfo_name(), sequence.escape_ascii());
    }

    Ok(())
}
