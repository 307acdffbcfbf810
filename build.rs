use schema::TypeChartData;
use std::env;
use std::fs;
use std::path::Path;

// Compiles data/type_chart.ron into a postcard blob that the library embeds
// as its built-in chart.
fn main() {
    let chart_path = Path::new("data").join("type_chart.ron");
    println!("cargo:rerun-if-changed={}", chart_path.display());

    let source = fs::read_to_string(&chart_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", chart_path.display(), e));
    let chart: TypeChartData = ron::from_str(&source)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", chart_path.display(), e));
    let bytes = postcard::to_allocvec(&chart)
        .unwrap_or_else(|e| panic!("Failed to encode type chart: {}", e));

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let out_path = Path::new(&out_dir).join("type_chart.postcard");
    fs::write(&out_path, bytes)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", out_path.display(), e));
}
