use debwatch_parser::{parse, serialize, Watch, WatchFile};

/// Parse, serialize and re-parse: the canonical rendering must be a fixed
/// point of the parser.
fn assert_stable(source: &str) {
    let wf = parse(source).unwrap().expect("document expected");
    let rendered = serialize(&wf);
    let reparsed = parse(&rendered).unwrap().expect("rendered document parses");
    assert_eq!(wf, reparsed, "round-trip changed the document:\n{rendered}");
}

#[test]
fn test_canonical_documents_are_fixed_points() {
    assert_stable("version=4\nhttps://samba.org/~jelmer/ blah-(\\d+).tar.gz\n");
    assert_stable("version=3\nhttps://samba.org/~jelmer/ blah-(\\d+).tar.gz debian\n");
    assert_stable(
        "version=4\nopts=useragent=lynx\nopts=pgpmode=mangle https://samba.org/~jelmer blah-(\\d+).tar.gz debian uupdate\n",
    );
    assert_stable("version=4\nhttps://salsa.debian.org/python-team/packages\n");
}

#[test]
fn test_continued_document_round_trips_structurally() {
    // physical wrapping is not preserved, structure is
    let source = r"version=4
opts=pgpmode=mangle,\
    foo=bar https://samba.org/~jelmer blah-(\d+).tar.gz
";
    let wf = parse(source).unwrap().unwrap();
    let rendered = serialize(&wf);
    assert_eq!(
        rendered,
        "version=4\nopts=pgpmode=mangle,foo=bar https://samba.org/~jelmer blah-(\\d+).tar.gz\n"
    );
    assert_eq!(parse(&rendered).unwrap().unwrap(), wf);
}

#[test]
fn test_split_pattern_round_trips_as_two_fields() {
    // a single-field URL is normalized into explicit url + pattern fields
    let source = "version=4\nhttps://samba.org/~jelmer/blah-(\\d+).tar.gz\n";
    let wf = parse(source).unwrap().unwrap();
    assert_eq!(
        serialize(&wf),
        "version=4\nhttps://samba.org/~jelmer blah-(\\d+).tar.gz\n"
    );
}

#[test]
fn test_programmatic_document_parses_back() {
    let mut wf = WatchFile::new();
    wf.options.push("useragent=lynx".to_string());
    wf.entries.push(Watch {
        version_policy: Some("debian".to_string()),
        script: Some("uupdate".to_string()),
        options: Some(vec!["pgpmode=auto".to_string()]),
        ..Watch::with_pattern("https://example.com/releases/", r"example-(\d[\d.]*)\.tar\.gz")
    });

    let rendered = serialize(&wf);
    let reparsed = parse(&rendered).unwrap().unwrap();
    assert_eq!(wf, reparsed);
}

#[test]
fn test_comments_are_not_preserved() {
    let source = "# watch file for foo\nversion=4\n# upstream moved 2019\nhttps://example.com/ foo-(.+)\\.tar\\.gz\n";
    let wf = parse(source).unwrap().unwrap();
    assert_eq!(
        serialize(&wf),
        "version=4\nhttps://example.com/ foo-(.+)\\.tar\\.gz\n"
    );
}
