// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: 2026 Twig Contributors

#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;
use twig_core::{CommentTreeBuilder, DiagnosticKind};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(comments) = twig_core::parse_comments(s) else {
        return;
    };

    let input: HashSet<i64> = comments.iter().map(|c| c.id).collect();
    let root_id = comments.first().map(|c| c.id);

    let report = CommentTreeBuilder::new(3).build_report(comments.clone(), None);
    let mut seen = HashSet::new();
    for comment in &report.comments {
        assert!(seen.insert(comment.id), "comment {} emitted twice", comment.id);
    }
    assert!(input.is_subset(&seen), "input comment lost");
    assert!(
        report
            .diagnostics
            .iter()
            .all(|d| d.kind == DiagnosticKind::DuplicateId || input.contains(&d.comment_id))
    );

    let _ = CommentTreeBuilder::new(3).build(comments, root_id);
});
