use rand::Rng;

const PNR_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const PNR_LEN: usize = 6;

// Human-facing booking reference; uniqueness is enforced by the store,
// the caller retries on collision
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    (0..PNR_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..PNR_CHARSET.len());
            PNR_CHARSET[idx] as char
        })
        .collect()
}
