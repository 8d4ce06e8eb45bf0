//! The access trace as an ordered, externally consumed record stream.

use crate::support::{sequence, texture, yuv_frame};
use fsbm_core::{Access, FrameGeometry, Plane, TraceRecord};
use fsbm_media::{Session, TraceWriter};
use fsbm_search::{loader_access_count, search_access_count};
use std::io::Cursor;

fn traced_run(g: FrameGeometry) -> Vec<TraceRecord> {
    let frame = yuv_frame(&g, texture);
    let mut session = Session::new(g, Vec::<TraceRecord>::new()).unwrap();
    session
        .run(1, &mut Cursor::new(sequence(&[frame.clone(), frame])), &mut Vec::<u8>::new())
        .unwrap();
    session.into_sink()
}

#[test]
fn load_search_rotate_phases() {
    let g = FrameGeometry::new(8, 4, 2, 3).unwrap();
    let trace = traced_run(g);
    let luma = g.luma_size() as u32;

    let loads = loader_access_count(&g, 2) as usize;
    let searches = search_access_count(&g).unwrap() as usize;
    let (load, rest) = trace.split_at(loads);
    let (search, rotate) = rest.split_at(searches);

    // Loading writes every byte of all six planes in address order.
    assert!(load.iter().all(|r| r.access == Access::Write));
    let addresses: Vec<u32> = load.iter().map(|r| r.address).collect();
    let expected: Vec<u32> = (0..3 * luma).collect();
    assert_eq!(addresses, expected);

    // The search reads luma only, alternating current and previous frame.
    for pair in search.chunks(2) {
        assert_eq!(pair[0].access, Access::Read);
        assert_eq!(pair[1].access, Access::Read);
        assert!((luma * 3 / 2..luma * 5 / 2).contains(&pair[0].address));
        assert!(pair[1].address < luma);
    }

    // Rotation alternates reads of the current frame and writes of the previous one.
    assert_eq!(rotate.len(), 2 * g.frame_size());
    for pair in rotate.chunks(2) {
        assert_eq!(pair[0].access, Access::Read);
        assert_eq!(pair[1].access, Access::Write);
        assert_eq!(pair[0].address - pair[1].address, luma * 3 / 2);
    }
}

#[test]
fn first_search_access_qcif() {
    let g = FrameGeometry::QCIF;
    let trace = traced_run(g);
    let first = loader_access_count(&g, 2) as usize;
    assert_eq!(trace[first].to_string(), "r 00009480 1");
    assert_eq!(trace[first + 1].to_string(), "r 00000000 1");
    assert_eq!(trace[first + 2].to_string(), "r 00009481 1");
}

#[test]
fn trace_file_lines_are_well_formed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace.log");
    let g = FrameGeometry::new(4, 2, 2, 2).unwrap();
    let frame = yuv_frame(&g, texture);

    let mut session = Session::new(g, TraceWriter::create(&path).unwrap()).unwrap();
    let summary = session
        .run(1, &mut Cursor::new(sequence(&[frame.clone(), frame])), &mut Vec::<u8>::new())
        .unwrap();
    drop(session);

    let text = std::fs::read_to_string(&path).unwrap();
    let limit = 3 * g.luma_size() as u32;
    let mut count = 0u64;
    for line in text.lines() {
        let fields: Vec<&str> = line.split(' ').collect();
        assert_eq!(fields.len(), 3, "{line}");
        assert!(fields[0] == "r" || fields[0] == "w");
        assert_eq!(fields[1].len(), 8);
        assert!(u32::from_str_radix(fields[1], 16).unwrap() < limit);
        assert_eq!(fields[2], "1");
        count += 1;
    }
    assert_eq!(count, summary.trace_records);
}

#[test]
fn chroma_is_never_searched() {
    let g = FrameGeometry::new(8, 4, 2, 3).unwrap();
    let trace = traced_run(g);
    let mut session = Session::new(g, Vec::<TraceRecord>::new()).unwrap();
    let layout = *session.memory().layout();
    let chroma_ranges: Vec<_> = [Plane::CurrentCb, Plane::CurrentCr]
        .into_iter()
        .map(|p| layout.base(p)..layout.base(p) + layout.plane_size(p))
        .collect();

    let loads = loader_access_count(&g, 2) as usize;
    let searches = search_access_count(&g).unwrap() as usize;
    for record in &trace[loads..loads + searches] {
        let address = record.address as usize;
        assert!(chroma_ranges.iter().all(|r| !r.contains(&address)));
    }

    // A session that never loaded anything has traced nothing.
    assert_eq!(session.memory().access_count(), 0);
    session
        .load_reference(&mut Cursor::new(yuv_frame(&g, texture)))
        .unwrap();
    assert_eq!(session.memory().access_count(), g.frame_size() as u64);
}
