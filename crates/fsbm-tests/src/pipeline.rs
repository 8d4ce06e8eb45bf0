//! End-to-end runs of the motion estimation pipeline.

use crate::support::{sequence, texture, yuv_frame};
use fsbm_core::{CountingSink, FrameGeometry, FsbmError};
use fsbm_media::{session, RunConfig, Session};
use fsbm_search::{loader_access_count, rotation_access_count, search_access_count};
use std::io::Cursor;

// ── Still sequence, QCIF ───────────────────────────────────────

#[test]
fn qcif_identical_frames_report_zero_motion() {
    let dir = tempfile::tempdir().unwrap();
    let g = FrameGeometry::QCIF;
    let config = RunConfig {
        frames: 1,
        geometry: g,
        input: dir.path().join("still.yuv"),
        results: dir.path().join("results.log"),
        trace: dir.path().join("trace.log"),
    };
    let frame = yuv_frame(&g, texture);
    std::fs::write(&config.input, sequence(&[frame.clone(), frame])).unwrap();

    let summary = session::run(&config).unwrap();
    assert_eq!(summary.frames.len(), 1);
    assert!(summary.frames[0].still);

    let results = std::fs::read_to_string(&config.results).unwrap();
    let lines: Vec<&str> = results.lines().collect();
    assert_eq!(lines[0], "");
    assert!(lines[1].contains("FRAME No. 1"));
    assert_eq!(lines[2], "MVs Table (MV_s,MV_y):");
    for row in &lines[3..12] {
        assert_eq!(*row, "(0,0)\t".repeat(11));
    }
    assert_eq!(lines[12], "SAD_MB Table:");
    for row in &lines[13..22] {
        assert_eq!(*row, "0\t".repeat(11));
    }
    assert_eq!(lines.len(), 22);

    let expected = loader_access_count(&g, 2)
        + search_access_count(&g).unwrap()
        + rotation_access_count(&g);
    assert_eq!(summary.trace_records, expected);
    let trace = std::fs::read_to_string(&config.trace).unwrap();
    assert_eq!(trace.lines().count() as u64, expected);
}

// ── Moving content ─────────────────────────────────────────────

#[test]
fn translated_frame_then_still_frame() {
    let g = FrameGeometry::QCIF;
    let reference = yuv_frame(&g, texture);
    // Content moves 2 pixels left and 1 down, then holds still.
    let moved = yuv_frame(&g, |x, y| texture(x + 2, y.saturating_sub(1)));
    let input = sequence(&[reference, moved.clone(), moved]);
    let mut input = Cursor::new(input);

    let mut session = Session::new(g, CountingSink::new()).unwrap();
    let mut results: Vec<u8> = Vec::new();
    session.load_reference(&mut input).unwrap();

    let first = session.process_frame(&mut input, &mut results).unwrap();
    assert!(!first.still);
    let field = session.motion_field();
    for block_l in 1..8 {
        for block_c in 0..10 {
            let mv = field.get(block_l, block_c).unwrap();
            assert_eq!((mv.dx, mv.dy, mv.cost), (2, -1, 0), "macroblock ({block_l}, {block_c})");
        }
    }

    let second = session.process_frame(&mut input, &mut results).unwrap();
    assert_eq!(second.index, 2);
    assert!(second.still);
    assert_eq!(first.accesses, second.accesses);
}

#[test]
fn unrelated_frames_stay_within_search_range() {
    let g = FrameGeometry::QCIF;
    let a = yuv_frame(&g, texture);
    let b = yuv_frame(&g, |x, y| texture(x * 3 + 1, y * 5 + 2));
    let mut session = Session::new(g, CountingSink::new()).unwrap();
    session
        .run(1, &mut Cursor::new(sequence(&[a, b])), &mut Vec::<u8>::new())
        .unwrap();

    let field = session.motion_field();
    assert_eq!(field.len(), g.macroblock_count());
    for mv in field.vectors() {
        assert!(mv.dx.abs() <= 8 && mv.dy.abs() <= 8);
        assert!(mv.cost > 0);
    }
}

// ── Other geometries ───────────────────────────────────────────

#[test]
fn small_macroblocks_multi_frame_count() {
    let g = FrameGeometry::new(8, 4, 4, 6).unwrap();
    let frames: Vec<Vec<u8>> = (0..4)
        .map(|shift| yuv_frame(&g, move |x, y| texture(x + shift, y)))
        .collect();
    let mut session = Session::new(g, CountingSink::new()).unwrap();
    let summary = session
        .run(3, &mut Cursor::new(sequence(&frames)), &mut Vec::<u8>::new())
        .unwrap();

    let per_frame =
        loader_access_count(&g, 1) + search_access_count(&g).unwrap() + rotation_access_count(&g);
    assert_eq!(summary.trace_records, loader_access_count(&g, 1) + 3 * per_frame);
    let sink = session.into_sink();
    assert_eq!(sink.writes, loader_access_count(&g, 4) + 3 * g.frame_size() as u64);
}

#[test]
fn input_one_frame_short() {
    let g = FrameGeometry::new(8, 4, 2, 2).unwrap();
    let frame = yuv_frame(&g, texture);
    let mut session = Session::new(g, CountingSink::new()).unwrap();
    let mut results: Vec<u8> = Vec::new();
    let err = session
        .run(2, &mut Cursor::new(sequence(&[frame.clone(), frame])), &mut results)
        .unwrap_err();
    assert!(matches!(err, FsbmError::InputExhausted { got: 0, .. }));
    assert_eq!(session.frames_done(), 1);
    assert!(String::from_utf8(results).unwrap().contains("FRAME No. 1"));
}
