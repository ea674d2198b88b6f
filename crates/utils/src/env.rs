// Copyright 2024 Irreducible Inc.

const TRUTHY_VALUES: [&str; 7] = ["1", "on", "ON", "true", "TRUE", "yes", "YES"];

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match std::env::var(flag) {
		Ok(val) => is_truthy(&val),
		Err(_) => false,
	}
}

fn is_truthy(val: &str) -> bool {
	TRUTHY_VALUES.contains(&val)
}
