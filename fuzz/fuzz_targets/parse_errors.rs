// SPDX-License-Identifier: Apache-2.0

#![no_main]

use libfuzzer_sys::fuzz_target;
use snaglog_core::download::MESSAGE_LIMIT;
use snaglog_core::{ErrorEvent, MAX_ERRORS_PREVIEW, TracingSink, forward_all, preview};

fuzz_target!(|data: &[u8]| {
    if let Ok(events) = serde_json::from_slice::<Vec<ErrorEvent>>(data) {
        let records = forward_all(&events, &mut TracingSink);
        assert_eq!(records.len(), events.len());

        let shown = preview(&records, &chrono::Utc::now());
        assert!(shown.rows.len() <= MAX_ERRORS_PREVIEW);
        assert!(shown.rows.iter().all(|row| row.message.chars().count() <= MESSAGE_LIMIT + 3));
    }
});
