use super::{ArgumentBuilder, Filter, Flag};

#[test]
fn compile_orders_base_flags_then_filters() {
    let mut builder = ArgumentBuilder::new(["-i input.mp4"]);
    builder.add_flag(Flag::GenPts);
    builder.add_filter(Filter::Concat);
    builder.compile();

    assert_eq!(
        builder.args(),
        ["-i input.mp4", "-f", " genpts ", "-fflags", " concat "]
    );
}

#[test]
fn compiling_twice_duplicates_groups() {
    let mut builder = ArgumentBuilder::new(["A"]);
    builder.add_flag(Flag::IgnDts);
    builder.add_filter(Filter::Segment);
    builder.compile();
    builder.compile();

    assert_eq!(
        builder.args(),
        [
            "A", "-f", " igndts ", "-fflags", " segment ", "-f", " igndts ", "-fflags",
            " segment "
        ]
    );
}

#[test]
fn unset_values_leave_groups_unchanged() {
    let mut builder = ArgumentBuilder::new(Vec::<String>::new());
    let flags_before = builder.flags().len();
    let filters_before = builder.filters().len();

    builder.add_flag(None);
    builder.add_filter(None);

    assert_eq!(builder.flags().len(), flags_before);
    assert_eq!(builder.filters().len(), filters_before);
}

#[test]
fn groups_are_seeded_with_selectors() {
    let builder = ArgumentBuilder::new(["-y"]);
    assert_eq!(builder.flags(), ["-f"]);
    assert_eq!(builder.filters(), ["-fflags"]);
    assert_eq!(builder.args(), ["-y"]);
}

#[test]
fn every_flag_renders_its_ffmpeg_name() {
    let names: Vec<&str> = Flag::ALL.iter().map(|flag| flag.as_str()).collect();
    assert_eq!(
        names,
        [
            "discardcorrupt",
            "fastseek",
            "genpts",
            "igndts",
            "ignidx",
            "nobuffer",
            "nofillin",
            "noparse",
            "sortdts"
        ]
    );
    assert_eq!(Filter::Concat.to_string(), "concat");
    assert_eq!(Filter::Segment.to_string(), "segment");
}

#[test]
fn argv_trims_padding_but_keeps_arguments_whole() {
    let mut builder = ArgumentBuilder::new(["-i", "my movie.mp4", "  ", "out.mp4"]);
    builder.add_flag(Flag::NoBuffer);
    builder.compile();

    assert_eq!(
        builder.argv(),
        ["-i", "my movie.mp4", "out.mp4", "-f", "nobuffer", "-fflags"]
    );
    assert_eq!(
        builder.command_line(),
        "-i my movie.mp4 out.mp4 -f nobuffer -fflags"
    );
}
