// File: crates/plot-core/tests/script.rs
// Purpose: Script compiler: header, type inference, series clauses and determinism.

use plot_core::{compile, series_clause, Command, PlotConfig, PlotError, Range, Series, TempFiles};
use std::path::Path;

fn compile_plot(cfg: &PlotConfig, output: &str) -> (String, TempFiles) {
    let mut temps = TempFiles::new();
    let script = compile(cfg, Command::Plot, Path::new(output), &mut temps).expect("compile");
    (script, temps)
}

fn plot_line(script: &str) -> &str {
    script.lines().last().expect("non-empty script")
}

#[test]
fn end_to_end_file_series() {
    let cfg = PlotConfig::new()
        .set("xlabel", "Time")
        .flag("grid", true)
        .series(Series::file("d.dat").using([1, 2]).with("l").width(2.0).title("series"));

    let (script, temps) = compile_plot(&cfg, "out.png");
    let lines: Vec<&str> = script.lines().collect();
    assert!(lines.contains(&"set xlabel \"Time\""));
    assert!(lines.contains(&"set grid"));
    assert_eq!(plot_line(&script), "plot \"d.dat\" u 1:2 w l lt 1 lw 2 t \"series\"");
    assert!(temps.is_empty(), "file series must not write temp files");
}

#[test]
fn output_type_inferred_from_extension() {
    let cfg = PlotConfig::new().series(Series::expression("x"));
    let (png, _) = compile_plot(&cfg, "out.png");
    assert!(png.starts_with("set terminal pngcairo enhanced "));
    let (svg, _) = compile_plot(&cfg, "plots/out.SVG");
    assert!(svg.starts_with("set terminal svg dashed enhanced "));
}

#[test]
fn explicit_type_and_driver_override() {
    let cfg = PlotConfig::new().output_type("svg").series(Series::expression("x"));
    let (script, _) = compile_plot(&cfg, "out.png");
    assert!(script.starts_with("set terminal svg dashed enhanced "));

    let cfg = PlotConfig::new().terminal("dumb").series(Series::expression("x"));
    let (script, _) = compile_plot(&cfg, "no-extension");
    assert!(script.starts_with("set terminal dumb size 500,400"));
}

#[test]
fn unknown_or_missing_type_is_a_config_error() {
    let cfg = PlotConfig::new().series(Series::expression("x"));
    let mut temps = TempFiles::new();
    let err = compile(&cfg, Command::Plot, Path::new("out.bmp"), &mut temps).unwrap_err();
    assert!(matches!(err, PlotError::UnknownOutputType(ref t) if t == "bmp"));
    let err = compile(&cfg, Command::Plot, Path::new("out"), &mut temps).unwrap_err();
    assert!(matches!(err, PlotError::MissingOutputType(_)));
    let cfg = cfg.output_type("tiff");
    assert!(compile(&cfg, Command::Plot, Path::new("out.png"), &mut temps).unwrap_err().is_config());
}

#[test]
fn clause_count_and_order_follow_series_list() {
    let cfg = PlotConfig::new()
        .series(Series::expression("sin(x)").title("a"))
        .series(Series::file("b.dat").title("b"))
        .series(Series::expression("cos(x)").title("c"));
    let (script, _) = compile_plot(&cfg, "out.png");
    let line = plot_line(&script).strip_prefix("plot ").unwrap();
    let clauses: Vec<&str> = line.split(", ").collect();
    assert_eq!(clauses.len(), 3);
    assert_eq!(clauses[0], "sin(x) w l lt 1 lw 2 t \"a\"");
    assert_eq!(clauses[1], "\"b.dat\" u 1:2 w l lt 2 lw 2 t \"b\"");
    assert_eq!(clauses[2], "cos(x) w l lt 3 lw 2 t \"c\"");
}

#[test]
fn explicit_line_type_wins_over_position() {
    let mut temps = TempFiles::new();
    let clause = series_clause(&Series::expression("x").line_type(9), 4, &mut temps).unwrap();
    assert_eq!(clause, "x w l lt 9 lw 2 t \"\"");
}

#[test]
fn array_series_is_materialized_once_per_compile() {
    let cfg = PlotConfig::new()
        .series(Series::array(vec![vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0]]).unwrap())
        .series(Series::function(|x| x * x, Range::new(0.0, 2.0, 1.0)).unwrap());
    let (script, temps) = compile_plot(&cfg, "out.png");

    assert_eq!(temps.len(), 2);
    let first = &temps.paths()[0];
    let second = &temps.paths()[1];
    assert_ne!(first, second);
    assert_eq!(std::fs::read_to_string(first).unwrap(), "1 10\n2 20\n3 30");
    assert_eq!(std::fs::read_to_string(second).unwrap(), "0 0\n1 1\n2 4");

    let line = plot_line(&script);
    assert!(line.starts_with(&format!("plot \"{}\" u 1:2 w l lt 1", first.display())));
    assert!(line.contains(&format!(", \"{}\" u 1:2 w l lt 2", second.display())));
}

#[test]
fn splot_uses_three_columns() {
    let cfg = PlotConfig::new().series(
        Series::array(vec![vec![0.0, 1.0], vec![0.0, 1.0], vec![5.0, 6.0]])
            .unwrap()
            .using([1, 2, 3])
            .with("pm3d"),
    );
    let mut temps = TempFiles::new();
    let script = compile(&cfg, Command::Splot, Path::new("surface.png"), &mut temps).unwrap();
    let line = plot_line(&script);
    assert!(line.starts_with("splot \""));
    assert!(line.ends_with(" u 1:2:3 w pm3d lt 1 lw 2 t \"\""));
}

#[test]
fn compile_is_deterministic() {
    let cfg = PlotConfig::new()
        .set("title", "Run")
        .set("xrange", "[0:5]")
        .flag("key", false)
        .series(Series::file("a.dat"))
        .series(Series::expression("x**2").title("sq"));
    let (a, _) = compile_plot(&cfg, "out.png");
    let (b, _) = compile_plot(&cfg, "out.png");
    assert_eq!(a, b);
}

#[test]
fn invalid_input_writes_nothing() {
    let cfg = PlotConfig::new()
        .series(Series::xy(&[(0.0, 1.0)]))
        .series(Series::file("d.dat").using(Vec::<u32>::new()));
    let mut temps = TempFiles::new();
    let err = compile(&cfg, Command::Plot, Path::new("out.png"), &mut temps).unwrap_err();
    assert!(matches!(err, PlotError::EmptyUsing { index: 2 }));
    assert!(temps.is_empty());

    let err = compile(&PlotConfig::new(), Command::Plot, Path::new("out.png"), &mut temps).unwrap_err();
    assert!(matches!(err, PlotError::NoSeries));
}

#[test]
fn terminal_tags_are_case_insensitive_with_jpg_alias() {
    use plot_core::Terminal;
    assert_eq!(Terminal::from_tag("JPG"), Some(Terminal::Jpeg));
    assert_eq!(Terminal::from_tag("jpeg").map(|t| t.driver()), Some("jpeg enhanced"));
    assert_eq!(Terminal::from_path(Path::new("a/b.gif")).unwrap().driver(), "gif enhanced");
    assert_eq!(Terminal::from_tag("pdf"), None);
}

fn compile_err(series: Series) -> PlotError {
    let cfg = PlotConfig::new().series(Series::expression("x")).series(series);
    let mut temps = TempFiles::new();
    let err = compile(&cfg, Command::Plot, Path::new("out.png"), &mut temps).unwrap_err();
    assert!(temps.is_empty());
    err
}

#[test]
fn blank_expression_is_rejected() {
    let err = compile_err(Series::expression("  "));
    assert!(matches!(err, PlotError::EmptyField { index: 2, field: "expression" }));
    assert!(err.is_config());
    assert_eq!(err.to_string(), "series 2: expression is empty");
}

#[test]
fn empty_file_path_is_rejected() {
    let err = compile_err(Series::file(""));
    assert!(matches!(err, PlotError::EmptyField { index: 2, field: "file path" }));
}

#[test]
fn empty_style_is_rejected() {
    let err = compile_err(Series::file("d.dat").with(""));
    assert!(matches!(err, PlotError::EmptyField { index: 2, field: "style" }));
    let err = compile_err(Series::xy(&[(0.0, 1.0)]).with(" "));
    assert!(matches!(err, PlotError::EmptyField { index: 2, field: "style" }));
}

#[test]
fn terminal_option_cannot_override_header() {
    let cfg = PlotConfig::new().set("terminal", "dumb").series(Series::expression("x"));
    let (script, _) = compile_plot(&cfg, "out.png");
    assert_eq!(script.lines().filter(|l| l.starts_with("set terminal")).count(), 1);
    assert!(script.starts_with("set terminal pngcairo enhanced "));
    assert!(!script.contains("dumb"));
}
