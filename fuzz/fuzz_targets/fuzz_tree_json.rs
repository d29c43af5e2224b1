#![no_main]

use libfuzzer_sys::fuzz_target;

use cascader::{parse_trees, CascadeController, Tree};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    // Loading, defaulting and picking must never panic on any document.
    let Ok(trees) = parse_trees(content) else {
        return;
    };
    for raw in trees {
        let mut tree = Tree::from_raw(raw);
        let mut controller = CascadeController::new(&mut tree);
        controller.initialize();
        for pair in data.chunks(2).take(16) {
            let level = pair[0] as usize % 5;
            let position = pair.get(1).copied().unwrap_or(0) as usize % 6;
            controller.on_pick(level, position);
        }
    }
});
