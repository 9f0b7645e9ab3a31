//! Replace this process with `node server.js`.
//!
//! Takes no arguments and reads no configuration. On success nothing here
//! runs past the exec; the runtime's exit code is the program's result.

use delegate::{delegate, diagnostic, exit_codes, logging};

fn main() {
    logging::init();
    let err = delegate();
    match diagnostic(&err) {
        Some(line) => eprintln!("{line}"),
        None => eprintln!("{:#}", anyhow::Error::new(err)),
    }
    std::process::exit(exit_codes::FAILURE);
}
