// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: 2026 Twig Contributors

#![no_main]

use libfuzzer_sys::fuzz_target;
use twig_core::CommentPath;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(path) = CommentPath::parse(s) {
        let reparsed = CommentPath::parse(&path.to_string()).expect("display output must parse");
        assert_eq!(path, reparsed);
        if let Some(parent) = path.parent() {
            assert_eq!(parent.depth() + 1, path.depth());
        }
    }
});
