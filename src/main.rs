use std::{env, fs, path::Path};

use tapec::bytecode::disasm::print_program;
use tapec::codegen::{OUTPUT_FILE, c};
use tapec::frontend::lexer::Lexer;
use tapec::frontend::token_dumper::TokenDumper;
use tapec::{Compiler, Error, Interpreter, InterpreterConfig, Program};

struct Options {
    run: bool,
    bytecode: bool,
    tokens_only: bool,
    no_color: bool,
    pretty: bool,
    optimize: bool,
    max_steps: Option<u64>,
    filename: Option<String>,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() == 1 || args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let options = match parse_args(&args[1..]) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            print_usage();
            std::process::exit(1);
        }
    };

    let Some(filename) = options.filename.as_deref() else {
        print_usage();
        std::process::exit(1);
    };

    let source = match fs::read_to_string(filename) {
        Ok(source) => source,
        Err(source) => fail(Error::ReadSource {
            path: filename.into(),
            source,
        }),
    };

    if options.tokens_only {
        dump_tokens(&source, options.no_color, options.pretty);
        return;
    }

    if let Err(e) = run_program(&source, &options) {
        fail(e);
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        run: false,
        bytecode: false,
        tokens_only: false,
        no_color: false,
        pretty: false,
        optimize: true,
        max_steps: None,
        filename: None,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--run" => options.run = true,
            "--bc" | "--bytecode" => options.bytecode = true,
            "--tokens" => options.tokens_only = true,
            "--no-color" => options.no_color = true,
            "--pretty" => options.pretty = true,
            "--no-opt" => options.optimize = false,
            "--max-steps" => {
                let value = iter.next().ok_or("--max-steps needs a value")?;
                let steps = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid step count '{}'", value))?;
                options.max_steps = Some(steps);
            }
            flag if flag.starts_with('-') => return Err(format!("unknown flag '{}'", flag)),
            // first non-flag argument is the filename
            name => {
                if options.filename.is_none() {
                    options.filename = Some(name.to_string());
                }
            }
        }
    }

    Ok(options)
}

fn print_usage() {
    println!("TAPEC - compiler for the eight-command tape language");
    println!();
    println!("Usage:");
    println!("  tapec <file>                 Compile to C and write {}", OUTPUT_FILE);
    println!("  tapec --run <file>           Interpret the program instead");
    println!("  tapec --bc <file>            Show the optimized instruction listing");
    println!("  tapec --tokens <file>        Show the commands found by the lexer");
    println!();
    println!("Flags:");
    println!("  --no-opt                     Skip the peephole optimizer");
    println!("  --max-steps <n>              Stop interpretation after n steps");
    println!("  --no-color, --pretty         Token dump formatting");
    println!("  --help, -h                   Show this help");
}

fn dump_tokens(source: &str, no_color: bool, pretty: bool) {
    let tokens = Lexer::new(source).tokenize();
    let mut dumper = TokenDumper::new();

    if no_color {
        dumper = dumper.no_color();
    }
    if pretty {
        dumper = dumper.pretty();
    }

    dumper.dump(&tokens);
}

fn run_program(source: &str, options: &Options) -> Result<(), Error> {
    let mut compiler = Compiler::new();
    if !options.optimize {
        compiler = compiler.without_optimizer();
    }
    let program = compiler.compile(source)?;

    if options.bytecode {
        print_program(&program);
        return Ok(());
    }

    if options.run {
        run_interpreter(&program, options.max_steps)
    } else {
        write_c(&program)
    }
}

fn run_interpreter(program: &Program, max_steps: Option<u64>) -> Result<(), Error> {
    let config = InterpreterConfig { max_steps };
    let mut vm = Interpreter::with_config(std::io::stdout(), config);
    vm.run(program)?;
    Ok(())
}

fn write_c(program: &Program) -> Result<(), Error> {
    let text = c::generate(program)?;
    let path = Path::new(OUTPUT_FILE);

    fs::write(path, text).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("wrote {}", path.display());
    Ok(())
}

fn fail(e: Error) -> ! {
    eprintln!("{}", e);
    std::process::exit(1);
}
