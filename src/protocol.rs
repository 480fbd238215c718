use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct SimpleResponse {
    pub success: bool,
    pub err: String,
}

impl SimpleResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            err: "".to_string(),
        }
    }
}

#[macro_export]
macro_rules! impl_err_response {
    ( $( $type:ty),+ $(,)? ) => {
        $(
            impl $type {
                pub fn err<S: ToString>(err: S) -> Self {
                    Self {
                        success: false,
                        err: err.to_string(),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

impl_err_response! {
    SimpleResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_carries_no_error() {
        let res = SimpleResponse::ok();
        assert!(res.success);
        assert!(res.err.is_empty());
    }

    #[test]
    fn err_response_keeps_the_message() {
        let res = SimpleResponse::err("slot taken");
        assert!(!res.success);
        assert_eq!(res.err, "slot taken");
    }
}
