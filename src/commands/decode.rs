use anyhow::Result;
use daypie_core::time::decode_range_key;

pub fn run(key: &str) -> Result<()> {
    let (start, end) = decode_range_key(key)?;
    println!("{} ~ {}", start, end);
    Ok(())
}
