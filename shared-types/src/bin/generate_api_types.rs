use shared_types::typescript_gen::ALL_TYPES;
use shared_types::generate_typescript_definitions;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("api-types"));
    fs::create_dir_all(&output_dir)?;

    let output = generate_typescript_definitions(ALL_TYPES)?;

    let output_path = output_dir.join("types.ts");
    fs::write(&output_path, format!("{}\n", output))?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}
