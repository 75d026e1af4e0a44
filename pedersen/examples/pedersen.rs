use pedersen::{pedersen_hash, Digest, GeneratorTable};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    GeneratorTable::global().expect("build generator table");

    let input = [0x90u8; 115];
    let point = pedersen_hash(&input).expect("hash");
    let digest = Digest::from(point);

    println!("x = {}", point.x);
    println!("y = {}", point.y);
    println!("digest = {}", digest);

    let bytes = bincode::serialize(&digest).expect("serialize digest");
    let decoded: Digest = bincode::deserialize(&bytes).expect("deserialize digest");
    assert_eq!(decoded, digest);
    assert_eq!(Digest::from_bytes(&digest.to_bytes()).expect("decode digest"), digest);
}
