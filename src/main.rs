use clap::{arg, crate_version, Command};
use dawg::Mode;
use std::io::Write;

fn prompt(label: &str) -> std::io::Result<String> {
  print!("{label}");
  std::io::stdout().flush()?;
  let mut line = String::new();
  std::io::stdin().read_line(&mut line)?;
  Ok(line.trim().to_owned())
}

fn prompt_output_path() -> std::io::Result<String> {
  loop {
    let path = prompt("Enter export path: ")?;
    if std::path::Path::new(&path).exists() {
      loop {
        let choice = prompt("File already exists. Overwrite? ")?;
        match choice.as_str() {
          "y" | "Y" => return Ok(path),
          "n" | "N" => break,
          _ => continue,
        }
      }
    } else {
      return Ok(path);
    }
  }
}

fn prompt_packing_mode(node_count: usize) -> std::io::Result<char> {
  let ok_3b = node_count <= 1 << 17;
  let ok_4b = node_count <= 1 << 22;
  loop {
    println!();
    println!("Choose node size:");
    println!(
      "    (3) bytes{}",
      if ok_3b { "" } else { " -> UNAVAILABLE: number of nodes above 2**17-1 or 131071" }
    );
    println!(
      "    (4) bytes{}",
      if ok_4b { "" } else { " -> UNAVAILABLE: number of nodes above 2**22-1 or 4194303" }
    );
    println!();
    let choice = prompt("> ")?;
    match choice.as_str() {
      "3" if ok_3b => return Ok('3'),
      "4" if ok_4b => return Ok('4'),
      _ => continue,
    }
  }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  env_logger::init();

  let long_help =
    "Examples:\n---------\nCompile a dictionary:      `dawg wordlist.txt`";

  let matches = Command::new("dawg")
    .about("Compiles a sorted uppercase word list into a bit-packed word graph")
    .after_long_help(long_help)
    .version(crate_version!())
    .arg(arg!(<WORDLIST> "path to a sorted, newline- or space-delimited word list"))
    .get_matches();

  let path = matches.get_one::<String>("WORDLIST").expect("required argument");
  let text = std::fs::read_to_string(path)?;
  let words: Vec<&str> = text.split_whitespace().collect();

  let assembled = dawg::assemble(&words)?;
  println!("Number of nodes: {}", assembled.node_count());

  let out_path = prompt_output_path()?;
  let mode_choice = prompt_packing_mode(assembled.node_count())?;
  let mode = if mode_choice == '3' { Mode::Mode3 } else { Mode::Mode4 };

  let bytes = assembled.encode(mode)?;
  std::fs::write(&out_path, &bytes)?;
  println!("Wrote {} bytes to {}", bytes.len(), out_path);

  Ok(())
}
