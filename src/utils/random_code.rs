use rand::Rng;
use rand::distr::Alphanumeric;

const CLASS_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// 生成由大写字母和数字组成的班级邀请码
pub fn generate_class_code(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| CLASS_CODE_CHARSET[rng.random_range(0..CLASS_CODE_CHARSET.len())] as char)
        .collect()
}

/// 生成随机密码（字母数字）
pub fn generate_random_password(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// 生成十六进制令牌，`bytes` 为随机字节数
pub fn generate_hex_token(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    rand::rng().fill(buf.as_mut_slice());
    buf.iter().map(|b| format!("{b:02x}")).collect()
}
