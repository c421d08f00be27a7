use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_CLASS_CODE_LEN: usize = 20;

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Nama wajib diisi");
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err("Nama maksimal 100 karakter");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email.trim()) {
        return Err("Format email tidak valid");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password minimal 6 karakter");
    }
    Ok(())
}

/// 班级邀请码只受列宽限制（varchar 20）
pub fn validate_class_code(code: &str) -> Result<(), &'static str> {
    if code.chars().count() > MAX_CLASS_CODE_LEN {
        return Err("Kode kelas maksimal 20 karakter");
    }
    Ok(())
}

/// 校验学生账户字段（姓名、邮箱、密码）
pub fn validate_account(name: &str, email: &str, password: &str) -> Result<(), &'static str> {
    validate_name(name)?;
    validate_email(email)?;
    validate_password(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(validate_email("budi@kampus.ac.id").is_ok());
        assert!(validate_email(" siti@example.com ").is_ok());
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn test_name() {
        assert!(validate_name("   ").is_err());
        assert!(validate_name("Budi").is_ok());
        assert!(validate_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_class_code() {
        assert!(validate_class_code("AB12CD").is_ok());
        assert!(validate_class_code("kelas-a1").is_ok());
        assert!(validate_class_code("MTK").is_ok());
        assert!(validate_class_code(&"K".repeat(20)).is_ok());
        assert!(validate_class_code(&"K".repeat(21)).is_err());
    }

    #[test]
    fn test_account() {
        assert_eq!(
            validate_account("Budi", "budi@x.com", "123"),
            Err("Password minimal 6 karakter")
        );
        assert!(validate_account("Budi", "budi@x.com", "rahasia").is_ok());
    }
}
