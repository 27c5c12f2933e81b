//! Tier 6: commands, notifications and the typed project API.

use tracegraph::{
    CollectingNotifier, Command, EditorConfig, Error, ErrorKind, ExtendOutcome, Level, Output,
    Project, StepDirection, Weight,
};

fn project() -> (Project, CollectingNotifier) {
    let sink = CollectingNotifier::new();
    let project = Project::with_notifier(EditorConfig::default(), sink.clone()).unwrap();
    (project, sink)
}

fn run(project: &mut Project, cmd: Command) -> Result<Output, Error> {
    project.executor_mut().execute(cmd)
}

fn id(s: &str) -> String {
    s.to_string()
}

#[test]
fn every_rejection_is_notified_with_its_kind() {
    let (mut p, sink) = project();
    for x in [0.0, 10.0, 20.0, 30.0] {
        p.add_node(x, 0.0).unwrap();
    }
    p.add_edge("N1", "N2").unwrap();
    p.add_edge("N2", "N3").unwrap();
    p.begin_path("N1").unwrap();

    let err = run(&mut p, Command::AdjacentExtend { target: id("N3") }).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAppend);
    run(&mut p, Command::AdjacentExtend { target: id("N2") }).unwrap();

    let rejected = [
        (Command::ShortestPathExtend { target: id("N4") }, ErrorKind::NoRoute),
        (Command::SelectEndpoint { node: id("N3") }, ErrorKind::InvalidEndpointSelection),
    ];
    let after_exit = [
        (Command::RemoveNode { id: id("N1") }, ErrorKind::ProtectedEntity),
        (Command::RemoveEdge { a: id("N2"), b: id("N1") }, ErrorKind::ProtectedEntity),
        (Command::AdjacentExtend { target: id("N3") }, ErrorKind::InvalidState),
        (Command::RemoveNode { id: id("N99") }, ErrorKind::NotFound),
        (Command::DeletePath { path_id: id("P9") }, ErrorKind::NotFound),
        (Command::LoadImage { width: 0, height: 0 }, ErrorKind::InvalidInput),
        (Command::ImportJson { json: id("{}") }, ErrorKind::ValidationError),
    ];
    let mut expected = vec![ErrorKind::InvalidAppend];
    for (cmd, kind) in rejected {
        let err = run(&mut p, cmd).unwrap_err();
        assert_eq!(err.kind(), kind, "{}", err);
        expected.push(kind);
    }
    p.exit_editing().unwrap();
    for (cmd, kind) in after_exit {
        let err = run(&mut p, cmd).unwrap_err();
        assert_eq!(err.kind(), kind, "{}", err);
        expected.push(kind);
    }

    let notices = sink.notices();
    assert!(notices.iter().all(|n| n.level == Level::Error));
    let kinds: Vec<ErrorKind> = notices.iter().filter_map(|n| n.kind).collect();
    assert_eq!(kinds, expected);
    assert_eq!(notices[0].command, "adjacent_extend");
    assert_eq!(notices[0].message, "Cannot append N3: no edge between N1 and N3");
    assert_eq!(notices[3].message, "Node N1 used in saved paths: Path 1");
}

#[test]
fn dimension_mismatch_is_a_warning_notice() {
    let (mut p, sink) = project();
    p.import_json(r#"{"imageWidth": 800, "imageHeight": 600}"#).unwrap();
    assert!(sink.notices().is_empty());

    let mismatch = p.load_image(640, 480).unwrap();
    assert!(mismatch.is_some());
    let notices = sink.drain();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, Level::Warning);
    assert_eq!(notices[0].kind, None);
    assert_eq!(notices[0].command, "load_image");
    assert!(notices[0].message.starts_with("Warning: "));

    // importing against the loaded image reports the same way
    p.import_json(r#"{"imageWidth": 100, "imageHeight": 100}"#).unwrap();
    assert_eq!(sink.drain()[0].command, "import_json");
}

#[test]
fn json_commands_drive_the_executor() {
    let (mut p, sink) = project();
    let script = [
        r#"{"command": "add_node", "x": 1, "y": 1}"#,
        r#"{"command": "add_node", "x": 5, "y": 1}"#,
        r#"{"command": "add_edge", "a": "N1", "b": "N2"}"#,
        r#"{"command": "set_edge_weight", "a": "N1", "b": "N2", "weight": "1/3"}"#,
        r#"{"command": "step_edge_weight", "a": "N2", "b": "N1", "direction": "up"}"#,
        r#"{"command": "set_edge_weight", "a": "N1", "b": "N2", "weight": 0.26}"#,
    ];
    let outputs: Vec<Output> = script
        .iter()
        .map(|line| {
            let cmd: Command = serde_json::from_str(line).unwrap();
            run(&mut p, cmd).unwrap()
        })
        .collect();

    assert_eq!(outputs[2], Output::Bool(true));
    assert_eq!(outputs[3], Output::Weight(Weight::unit_fraction(3)));
    assert_eq!(outputs[4], Output::Weight(Weight::unit_fraction(2)));
    assert_eq!(outputs[5], Output::Weight(Weight::unit_fraction(4)));
    assert!(sink.notices().is_empty());

    let unknown = serde_json::from_str::<Command>(r#"{"command": "teleport"}"#);
    assert!(unknown.is_err());
}

#[test]
fn status_reports_history_and_state() {
    let (mut p, _) = project();
    p.add_node(0.0, 0.0).unwrap();
    p.add_node(1.0, 0.0).unwrap();
    p.undo().unwrap();
    p.begin_path("N1").unwrap();

    let status = match run(&mut p, Command::Status).unwrap() {
        Output::Status(s) => s,
        other => panic!("Expected status, got {:?}", other),
    };
    assert_eq!((status.nodes, status.edges, status.paths), (1, 0, 1));
    // beginning a path discards the redo branch
    assert_eq!((status.undo_depth, status.redo_depth), (2, 0));
    assert!(status.state.active_path_id() == Some("P1"));
    assert_eq!(status.image, None);
}

#[test]
fn typed_api_walkthrough() {
    let (mut p, sink) = project();
    for x in [0.0, 10.0, 20.0] {
        p.add_node(x, 0.0).unwrap();
    }
    assert!(p.add_edge("N1", "N2").unwrap());
    assert!(!p.add_edge("N2", "N1").unwrap());
    assert!(p.toggle_edge("N2", "N3").unwrap());
    assert_eq!(
        p.step_edge_weight("N2", "N3", StepDirection::Down).unwrap(),
        Weight::unit_fraction(2)
    );

    let path = p.begin_path("N3").unwrap();
    assert_eq!(path.label, "Path 1");
    assert_eq!(
        p.shortest_path_extend("N1").unwrap(),
        ExtendOutcome::Appended {
            added: vec![id("N2"), id("N1")]
        }
    );
    p.exit_editing().unwrap();
    assert!(p.rename_path("P1", "Home").unwrap());

    let err = p.toggle_edge("N1", "N2").unwrap_err();
    assert_eq!(err.to_string(), "Edge N1-N2 used in saved paths: Home");
    assert_eq!(sink.notices().len(), 1);

    let stats = p.list_paths().unwrap();
    assert_eq!(stats[0].total_weight, 1.5);
    assert_eq!(p.shortest_route("N3", "N1").unwrap().cost, 1.5);

    p.delete_path("P1").unwrap();
    assert!(!p.toggle_edge("N1", "N2").unwrap());
    assert!(p.undo().unwrap());
    assert!(p.undo().unwrap());
    assert_eq!(p.editor().paths().get("P1").unwrap().label, "Home");
    p.clear().unwrap();
    assert_eq!(p.editor().graph().node_count(), 0);
    assert!(p.undo().unwrap());
    assert_eq!(p.editor().graph().node_count(), 3);
}

#[test]
fn project_files_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("project.json");

    let (mut p, _) = project();
    p.load_image(320, 240).unwrap();
    p.add_node(5.0, 5.0).unwrap();
    p.add_node(50.0, 5.0).unwrap();
    p.add_edge("N1", "N2").unwrap();
    p.set_edge_weight("N1", "N2", "2").unwrap();
    p.save_file(&file).unwrap();

    let (mut q, sink) = project();
    let report = q.load_file(&file).unwrap();
    assert_eq!((report.nodes, report.edges), (2, 1));
    assert_eq!(q.editor().graph().edges(), p.editor().graph().edges());
    assert!(!q.undo().unwrap());

    let err = q.load_file(dir.path().join("missing.json")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(sink.notices().is_empty());
}
