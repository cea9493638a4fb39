use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("artstudy").chain(args.iter().copied()))
}

#[test]
fn sketch_defaults_to_stdin_and_default_size() {
    let Command::Sketch(cmd) = parse(&["sketch"]).unwrap().command else {
        panic!("expected sketch");
    };
    assert_eq!(cmd.input, "-");
    assert_eq!((cmd.width, cmd.height), (DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT));
}

#[test]
fn sketch_accepts_sizes_up_to_the_limit() {
    let max = MAX_CANVAS_SIDE.to_string();
    let Command::Sketch(cmd) = parse(&["sketch", "--width", &max, "--height", "1"]).unwrap().command else {
        panic!("expected sketch");
    };
    assert_eq!((cmd.width, cmd.height), (MAX_CANVAS_SIDE, 1));
}

#[test]
fn sketch_rejects_zero_and_oversized_surfaces() {
    let over = (MAX_CANVAS_SIDE + 1).to_string();
    assert!(parse(&["sketch", "--width", "0"]).is_err());
    assert!(parse(&["sketch", "--height", &over]).is_err());
    assert!(parse(&["sketch", "--width", "4294967295"]).is_err());
}

#[test]
fn artwork_flags_choose_selection() {
    let selection = |args: &[&str]| {
        let Command::Artwork(cmd) = parse(args).unwrap().command else {
            panic!("expected artwork");
        };
        selection_for(cmd)
    };
    assert_eq!(selection(&["artwork"]), Selection::default());
    assert_eq!(selection(&["artwork", "--catalog"]), Selection::default_departments());
    assert_eq!(
        selection(&["artwork", "--department", "Asian Art", "--department", "Islamic Art"]),
        Selection::Departments(vec!["Asian Art".into(), "Islamic Art".into()])
    );
    assert!(parse(&["artwork", "--catalog", "--department", "Asian Art"]).is_err());
}
