// The wasm entry point is `travel_admin_frontend::start`; trunk only needs a
// binary target to link the library.
use travel_admin_frontend as _;

fn main() {}
