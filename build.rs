use cbindgen::Config;
use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // 获取目标目录（根据构建模式，可能是 target/debug 或 target/release）
    let out_dir = if cfg!(debug_assertions) {
        PathBuf::from(env::var("CARGO_TARGET_DIR").unwrap_or_else(|_| "target".into()))
            .join("debug")
    } else {
        PathBuf::from(env::var("CARGO_TARGET_DIR").unwrap_or_else(|_| "target".into()))
            .join("release")
    };

    // 获取当前 crate 的根目录
    let crate_dir =
        env::var("CARGO_MANIFEST_DIR").expect("Could not find Cargo manifest directory");

    // 加载配置文件，没有配置文件时使用默认配置
    let config = Config::from_file("cbindgen.toml").unwrap_or_default();

    // 尝试生成绑定并写入到输出目录下的头文件中
    match cbindgen::generate_with_config(&crate_dir, config) {
        Ok(bindings) => {
            if let Some(parent) = out_dir.parent() {
                fs::create_dir_all(parent)
                    .expect("Unable to create parent directories for output file");
            }

            bindings.write_to_file(out_dir.join("dl_list.h"));
        }
        Err(e) => {
            // 头文件生成失败不应阻断库本身的构建
            eprintln!("Failed to generate bindings: {:?}", e);
        }
    }

    println!("cargo:rerun-if-changed=src/c_list.rs");
    println!("cargo:rerun-if-changed=cbindgen.toml");
}
