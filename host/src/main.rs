use lorem::{
    datetime, format_rfc3339, generate_text, parse_utc, truncate_seed, GeneratedText,
    TextRequest, Unit,
};
use lorem_core::TextGenerator;
use std::env;
use std::process;

fn main() {
    // Logs go to stderr so stdout carries only the generated text
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "words" | "sentences" | "paragraphs" => {
            if args.len() < 3 {
                eprintln!(
                    "Usage: {} {} <count> [--deviation <d>] [--seed <n>] [--fixed-start] [--json]",
                    args[0], command
                );
                process::exit(1);
            }

            let unit: Unit = command.parse().unwrap_or_else(|e| fail(e));
            let count: f64 = args[2].parse().unwrap_or_else(|_| {
                fail(format!("Invalid count '{}'. Must be a number.", args[2]))
            });

            let mut request = TextRequest::new(unit, count);
            let mut json = false;
            let mut rest = args[3..].iter();
            while let Some(flag) = rest.next() {
                match flag.as_str() {
                    "--deviation" => {
                        request.deviation = flag_value(flag, rest.next());
                    }
                    "--seed" => {
                        request.seed = Some(flag_value(flag, rest.next()));
                    }
                    "--fixed-start" => request.fixed_start = true,
                    "--json" => json = true,
                    other => fail(format!("Unknown option: {}", other)),
                }
            }

            generate_command(&request, json);
        }

        "from-file" => {
            if args.len() < 3 {
                eprintln!("Usage: {} from-file <request_file> [--json]", args[0]);
                process::exit(1);
            }

            let request = TextRequest::load(&args[2]).unwrap_or_else(|e| {
                fail(format!("Error loading request from {}: {}", args[2], e))
            });
            let json = args.get(3).is_some_and(|a| a == "--json");

            generate_command(&request, json);
        }

        "datetime" => {
            if args.len() < 4 {
                eprintln!(
                    "Usage: {} datetime <min> <max> [--seed <n>] [--samples <n>]",
                    args[0]
                );
                process::exit(1);
            }

            let min = parse_utc(&args[2]).unwrap_or_else(|e| fail(e));
            let max = parse_utc(&args[3]).unwrap_or_else(|e| fail(e));

            let mut seed = None;
            let mut samples: usize = 1;
            let mut rest = args[4..].iter();
            while let Some(flag) = rest.next() {
                match flag.as_str() {
                    "--seed" => seed = Some(flag_value(flag, rest.next())),
                    "--samples" => samples = flag_value(flag, rest.next()),
                    other => fail(format!("Unknown option: {}", other)),
                }
            }

            datetime_command(min, max, seed, samples);
        }

        _ => {
            eprintln!("❌ Unknown command: {}", command);
            print_usage(&args[0]);
            process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [options]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  words|sentences|paragraphs <count> [--deviation <d>] [--seed <n>] [--fixed-start] [--json]");
    eprintln!("      Generate lorem ipsum text");
    eprintln!("      - count: Mean number of units (may be fractional)");
    eprintln!("      - --deviation: Standard deviation of the unit count (default 0)");
    eprintln!("      - --seed: Integer seed; the same seed always yields the same text");
    eprintln!("                Only the low 32 bits are used (-1 equals 4294967295)");
    eprintln!("      - --fixed-start: Begin with \"lorem ipsum dolor sit amet ...\"");
    eprintln!("      - --json: Print the seed, items and text as JSON");
    eprintln!();
    eprintln!("  from-file <request_file> [--json]");
    eprintln!("      Generate text from a JSON request file");
    eprintln!();
    eprintln!("  datetime <min> <max> [--seed <n>] [--samples <n>]");
    eprintln!("      Print random UTC timestamps between two bounds (inclusive)");
    eprintln!("      - min, max: YYYY-MM-DD, YYYY-MM-DDTHH:MM:SS or @<unix seconds>");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} paragraphs 1.2 --deviation 0.5 --seed 47513", program);
    eprintln!("  {} words 12 --fixed-start", program);
    eprintln!("  {} datetime 2021-04-01 2021-07-01 --samples 10", program);
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("❌ Error: {}", message);
    process::exit(1);
}

fn flag_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> T {
    let Some(value) = value else {
        fail(format!("{} requires a value", flag));
    };
    value
        .parse()
        .unwrap_or_else(|_| fail(format!("Invalid value for {}: '{}'", flag, value)))
}

fn generate_command(request: &TextRequest, json: bool) {
    match generate_text(request) {
        Ok(output) => print_output(&output, json),
        Err(e) => fail(format!("Error generating text: {}", e)),
    }
}

fn print_output(output: &GeneratedText, json: bool) {
    if json {
        match serde_json::to_string_pretty(output) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(format!("Error serializing output: {}", e)),
        }
    } else {
        println!("{}", output.text);
    }
}

fn datetime_command(min: i64, max: i64, seed: Option<i64>, samples: usize) {
    let seed = seed
        .map(truncate_seed)
        .unwrap_or_else(lorem_core::seed::entropy_seed);
    tracing::info!("Drawing {} timestamp(s) from seed {}", samples, seed);

    let mut gen = TextGenerator::new(Some(seed));
    for _ in 0..samples {
        match datetime(&mut gen, min, max) {
            Ok(time) => println!("{}", format_rfc3339(time)),
            Err(e) => fail(e),
        }
    }
}
