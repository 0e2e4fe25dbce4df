use screenplay_rust::{parse_screenplay, script_to_json, summarize_script};
use std::env;
use std::fs;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <script_file> [--json]", args[0]);
        return;
    }

    let file_path = &args[1];

    match parse_screenplay(file_path, None) {
        Ok(doc) => {
            println!("{}", summarize_script(&doc));

            if args.iter().any(|a| a == "--json") {
                match script_to_json(&doc) {
                    Ok(json) => {
                        let json_path = format!("{}.json", file_path);
                        fs::write(&json_path, json).unwrap();
                        println!("JSON输出已保存到: {}", json_path);
                    }
                    Err(e) => {
                        println!("JSON序列化失败: {}", e);
                    }
                }
            }
        }
        Err(e) => {
            println!("读取文件失败: {}", e);
        }
    }
}
