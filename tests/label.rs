use zebra_checkdigit::{build_barcode_label, build_ean13_label, Barcode, LabelConfig, LabelError};

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[test]
fn bitmap_job_layout() {
    let config = LabelConfig::from_toml_str("mode = \"bitmap\"").unwrap();
    let job = build_ean13_label(&config, &["540011301174"]).unwrap();

    assert!(job.starts_with(b"N\r\nq440\r\nQ320,24\r\nD8\r\nS2\r\n"));
    // (95 + 2*9) modules * 2 dots = 226 wide → 29 bytes per row, centred at x=107;
    // no text line under a bitmap, so y = (320 - 50) / 2
    let header = b"GW107,135,29,50\r\n";
    let at = find(&job, header).expect("GW header");
    let rows = &job[at + header.len()..at + header.len() + 29 * 50];
    // quiet zone is white, inverted to 1 bits
    assert_eq!(rows[0], 0xFF);
    // dots 16..24: white, start guard bar, space, bar
    assert_eq!(rows[2], 0xCC);
    assert_eq!(&job[at + header.len() + 29 * 50..], b"\r\nP1\r\n");
}

#[test]
fn landscape_native_job() {
    let config = LabelConfig {
        landscape: true,
        ..LabelConfig::default()
    };
    let job = build_barcode_label(&config, &[Barcode::ean13("540011301174").unwrap()]).unwrap();
    let text = String::from_utf8(job).unwrap();
    assert!(text.contains("B184,65,1,E30,2,3,50,B,\"540011301174\"\r\n"));
}

#[test]
fn mixed_symbologies() {
    let config = LabelConfig::from_toml_str("human_readable = false").unwrap();
    let barcodes = [
        Barcode::ean8("9638507").unwrap(),
        Barcode::upca("036000291452").unwrap(),
    ];
    let text = String::from_utf8(build_barcode_label(&config, &barcodes).unwrap()).unwrap();
    assert!(text.contains(",E80,2,3,50,N,\"9638507\""));
    assert!(text.contains(",UA0,2,3,50,N,\"03600029145\""));
}

#[test]
fn too_many_rows() {
    let codes = ["540011301174"; 5];
    let err = build_ean13_label(&LabelConfig::default(), &codes).unwrap_err();
    assert!(matches!(err, LabelError::Layout { needed: 72, available: 64, .. }));
}

#[test]
fn bitmap_rows_reserve_no_text_line() {
    let config = LabelConfig::from_toml_str("mode = \"bitmap\"").unwrap();
    let codes = ["540011301174"; 5];
    let job = build_ean13_label(&config, &codes).unwrap();
    // five 64-dot slots, 50-dot bars centred in each
    assert!(find(&job, b"GW107,7,29,50\r\n").is_some());
    assert!(find(&job, b"GW107,263,29,50\r\n").is_some());
}
