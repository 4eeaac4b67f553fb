#![no_main]

use asciigol::config;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic the parser
    let Ok(grid) = config::parse(data) else {
        return;
    };

    assert_eq!(grid.len(), usize::from(grid.width()) * usize::from(grid.height()));

    // Dimension lines like "007,+3" are accepted, so compare grids, not bytes
    let text = config::to_string(&grid);
    let reparsed = config::parse(text.as_bytes()).expect("serialized grid must parse");
    assert_eq!(reparsed, grid);
});
