#[cfg(test)]
mod tests {
    use bytes::BytesMut;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use tsccfix::report::RunReport;
    use tsccfix::ts::{TSHeader, TS_PACKET_SIZE};
    use tsccfix::{ContinuityCorrector, MappedTsFile, TsccError};

    fn packet(pid: u16, cc: u8, payload: bool) -> Vec<u8> {
        let header = TSHeader {
            pid,
            contains_payload: payload,
            adaptation_field_exists: !payload,
            continuity_counter: cc,
            ..Default::default()
        };
        let mut buf = BytesMut::with_capacity(TS_PACKET_SIZE);
        header.write_to(&mut buf).unwrap();
        buf.resize(TS_PACKET_SIZE, 0xFF);
        buf.to_vec()
    }

    fn write_ts(dir: &TempDir, name: &str, packets: &[Vec<u8>]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, packets.concat()).unwrap();
        path
    }

    fn ccs_on_disk(path: &Path) -> Vec<u8> {
        fs::read(path)
            .unwrap()
            .chunks(TS_PACKET_SIZE)
            .map(|p| p[3] & 0x0F)
            .collect()
    }

    // The same loop the binary runs: map, process, flush, in argument
    // order, sharing one corrector.
    fn repair(paths: &[PathBuf]) -> Result<(Vec<u64>, RunReport), TsccError> {
        let mut corrector = ContinuityCorrector::new();
        let mut per_file = Vec::new();

        for path in paths {
            let mut file = MappedTsFile::open(path)?;
            let label = file.label().to_string();
            per_file.push(corrector.process(file.as_mut_slice(), &label)?);
            file.flush()?;
        }

        Ok((per_file, RunReport::from_corrector(&corrector)))
    }

    #[test]
    fn test_single_file_repaired_in_place() {
        let dir = TempDir::new().unwrap();
        let path = write_ts(
            &dir,
            "seg0.ts",
            &[0u8, 1, 2, 5, 6]
                .iter()
                .map(|&cc| packet(0x100, cc, true))
                .collect::<Vec<_>>(),
        );

        let (per_file, report) = repair(&[path.clone()]).unwrap();

        assert_eq!(ccs_on_disk(&path), vec![0, 1, 2, 3, 4]);
        assert_eq!(per_file, vec![2]);
        assert_eq!(report.pids.len(), 1);
        assert_eq!(report.pids[0].pid, 0x100);
        assert_eq!(report.pids[0].corrections, 2);
        assert_eq!(report.total, 2);
    }

    #[test]
    fn test_continuity_flows_across_files() {
        let dir = TempDir::new().unwrap();
        // seg0 is internally clean and ends PID 0x200 at CC 7; seg1 was
        // cut from elsewhere in the stream and starts at CC 10.
        let seg0 = write_ts(
            &dir,
            "seg0.ts",
            &(4..8).map(|cc| packet(0x200, cc, true)).collect::<Vec<_>>(),
        );
        let seg1 = write_ts(
            &dir,
            "seg1.ts",
            &(10..13).map(|cc| packet(0x200, cc, true)).collect::<Vec<_>>(),
        );

        let (per_file, report) = repair(&[seg0.clone(), seg1.clone()]).unwrap();

        // The whole of seg1 is rewritten onto the validated sequence
        // that seg0 ended on.
        assert_eq!(ccs_on_disk(&seg0), vec![4, 5, 6, 7]);
        assert_eq!(ccs_on_disk(&seg1), vec![8, 9, 10]);
        assert_eq!(per_file, vec![0, 3]);
        assert_eq!(report.total, 3);
    }

    #[test]
    fn test_second_run_is_a_noop() {
        let dir = TempDir::new().unwrap();
        let seg0 = write_ts(
            &dir,
            "seg0.ts",
            &[packet(0x100, 0, true), packet(0x100, 9, true)],
        );
        let seg1 = write_ts(
            &dir,
            "seg1.ts",
            &[packet(0x100, 4, true), packet(0x31, 2, true)],
        );

        let paths = [seg0, seg1];
        repair(&paths).unwrap();
        let after_first: Vec<_> = paths.iter().map(|p| fs::read(p).unwrap()).collect();

        let (per_file, report) = repair(&paths).unwrap();
        let after_second: Vec<_> = paths.iter().map(|p| fs::read(p).unwrap()).collect();

        assert_eq!(per_file, vec![0, 0]);
        assert_eq!(report.total, 0);
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn test_mixed_pids_reported_in_order() {
        let dir = TempDir::new().unwrap();
        let path = write_ts(
            &dir,
            "mux.ts",
            &[
                packet(0x1000, 0, true),
                packet(0x0031, 5, true),
                packet(0x1000, 1, true),
                packet(0x0031, 9, true), // expected 6
            ],
        );

        let (_, report) = repair(&[path]).unwrap();

        let pids: Vec<u16> = report.pids.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![0x0031, 0x1000]);
        assert_eq!(report.pids[0].corrections, 1);
        assert_eq!(report.pids[1].corrections, 0);
    }

    #[test]
    fn test_bad_sync_byte_aborts_run() {
        let dir = TempDir::new().unwrap();
        let mut packets = vec![packet(0x100, 0, true), packet(0x100, 1, true)];
        packets[1][0] = 0x00;
        let path = write_ts(&dir, "torn.ts", &packets);

        let err = repair(&[path]).unwrap_err();
        match err {
            TsccError::SyncByte { offset, found, .. } => {
                assert_eq!(offset, TS_PACKET_SIZE as u64);
                assert_eq!(found, 0x00);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_truncated_file_rejected_before_processing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cut.ts");
        fs::write(&path, vec![0x47u8; TS_PACKET_SIZE - 1]).unwrap();

        assert!(matches!(
            repair(&[path]),
            Err(TsccError::Misaligned { .. })
        ));
    }

    #[test]
    fn test_empty_file_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.ts");
        fs::write(&path, b"").unwrap();

        assert!(matches!(repair(&[path]), Err(TsccError::Empty { .. })));
    }
}
