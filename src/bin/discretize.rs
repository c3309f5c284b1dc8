use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use discretizer::{from_hex, to_hex, Discretizer, DiscretizerConfig, MappingKind};
use log::info;
use serde_json::json;
use std::process;

fn main() {
    env_logger::init();

    let matches = Command::new("discretize")
        .version(env!("CARGO_PKG_VERSION"))
        .about("유계 실수 ↔ 고정 폭 버킷 코드 변환 도구")
        .arg(
            Arg::new("bytes")
                .long("bytes")
                .short('b')
                .value_name("N")
                .help("코드 바이트 수 (1-7)")
                .default_value("1")
                .global(true)
        )
        .arg(
            Arg::new("min")
                .long("min")
                .value_name("VALUE")
                .help("값 하한")
                .default_value("0.0")
                .allow_negative_numbers(true)
                .global(true)
        )
        .arg(
            Arg::new("max")
                .long("max")
                .value_name("VALUE")
                .help("값 상한")
                .default_value("1.0")
                .allow_negative_numbers(true)
                .global(true)
        )
        .arg(
            Arg::new("mapping")
                .long("mapping")
                .short('m')
                .value_name("KIND")
                .help("매핑 전략 (linear, cube-root, sigmoid)")
                .default_value("linear")
                .global(true)
        )
        .arg(
            Arg::new("sharpness")
                .long("sharpness")
                .short('k')
                .value_name("K")
                .help("시그모이드 날카로움 (> 0)")
                .global(true)
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("JSON")
                .help("JSON 구성 (지정 시 다른 구성 인자 무시)")
                .global(true)
        )
        .subcommand(
            Command::new("encode")
                .about("값을 바이트 코드로 인코딩")
                .arg(
                    Arg::new("values")
                        .required(true)
                        .action(ArgAction::Append)
                        .allow_negative_numbers(true)
                        .help("인코딩할 값들")
                )
        )
        .subcommand(
            Command::new("decode")
                .about("16진수 바이트 코드를 값으로 디코딩")
                .arg(
                    Arg::new("codes")
                        .required(true)
                        .action(ArgAction::Append)
                        .help("디코딩할 16진수 코드들 (예: 80, 01ff)")
                )
        )
        .subcommand(
            Command::new("info")
                .about("구성과 파생 상수를 JSON으로 출력")
        )
        .get_matches();

    let result = build_discretizer(&matches).and_then(|d| match matches.subcommand() {
        Some(("encode", sub_matches)) => handle_encode(&d, sub_matches),
        Some(("decode", sub_matches)) => handle_decode(&d, sub_matches),
        Some(("info", _)) => handle_info(&d),
        _ => bail!("명령을 지정해주세요. --help를 참조하세요."),
    });

    if let Err(e) = result {
        eprintln!("오류: {:#}", e);
        process::exit(1);
    }
}

fn build_discretizer(matches: &ArgMatches) -> Result<Discretizer> {
    if let Some(json) = matches.get_one::<String>("config") {
        let config = DiscretizerConfig::from_json(json).context("JSON 구성 파싱 실패")?;
        return Ok(config.build()?);
    }

    let bytes: usize = parse_arg(matches, "bytes")?;
    let min: f64 = parse_arg(matches, "min")?;
    let max: f64 = parse_arg(matches, "max")?;
    let kind: MappingKind = parse_arg(matches, "mapping")?;
    let sharpness = matches
        .get_one::<String>("sharpness")
        .map(|s| s.parse::<f64>().with_context(|| format!("잘못된 sharpness: {}", s)))
        .transpose()?;

    let mapping = kind.with_sharpness(sharpness)?;
    let d = Discretizer::new(bytes, min, max, mapping)?;
    info!("using {} byte(s) over [{}, {}] with {}", bytes, min, max, d.mapping());
    Ok(d)
}

fn parse_arg<T>(matches: &ArgMatches, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = matches
        .get_one::<String>(name)
        .with_context(|| format!("--{} 인자가 없습니다", name))?;
    raw.parse::<T>()
        .with_context(|| format!("--{} 값이 잘못되었습니다: {}", name, raw))
}

fn handle_encode(d: &Discretizer, matches: &ArgMatches) -> Result<()> {
    for raw in matches.get_many::<String>("values").into_iter().flatten() {
        let value: f64 = raw
            .parse()
            .with_context(|| format!("숫자가 아닙니다: {}", raw))?;
        let bucket = d.value_to_bucket(value)?;
        let bytes = d.encode(value)?;
        println!("{}\t{}\t{}", value, bucket, to_hex(&bytes));
    }
    Ok(())
}

fn handle_decode(d: &Discretizer, matches: &ArgMatches) -> Result<()> {
    for raw in matches.get_many::<String>("codes").into_iter().flatten() {
        let bytes = from_hex(raw)?;
        let value = d.decode(&bytes)?;
        println!("{}\t{}", raw, value);
    }
    Ok(())
}

fn handle_info(d: &Discretizer) -> Result<()> {
    let report = json!({
        "config": d.config(),
        "mapping": d.mapping().to_string(),
        "bucket_count": d.bucket_count(),
        "max_bucket": d.max_bucket(),
        "value_range": d.value_range(),
        "step": d.value_range() / d.bucket_count() as f64,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
