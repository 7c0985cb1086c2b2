//! Request/response interceptors
//!
//! An interceptor is a plain synchronous transformation. Request interceptors
//! map `request -> request'` before transmission; response interceptors map
//! `outcome -> outcome'` once the exchange has finished. The [`Pipeline`]
//! runs both kinds in registration order.

use super::ClientError;
use reqwest::{Request, Response};
use std::fmt;
use std::rc::Rc;

/// Result of a single exchange as seen by response interceptors
pub type Outcome = Result<Response, ClientError>;

/// Transformation applied to every outgoing request
pub trait RequestInterceptor {
    fn on_request(&self, request: Request) -> Result<Request, ClientError>;
}

/// Transformation applied to every completed or failed exchange
pub trait ResponseInterceptor {
    fn on_response(&self, outcome: Outcome) -> Outcome;
}

impl<F> RequestInterceptor for F
where
    F: Fn(Request) -> Result<Request, ClientError>,
{
    fn on_request(&self, request: Request) -> Result<Request, ClientError> {
        self(request)
    }
}

impl<F> ResponseInterceptor for F
where
    F: Fn(Outcome) -> Outcome,
{
    fn on_response(&self, outcome: Outcome) -> Outcome {
        self(outcome)
    }
}

/// Ordered interceptor chains owned by a client
#[derive(Clone, Default)]
pub struct Pipeline {
    request: Vec<Rc<dyn RequestInterceptor>>,
    response: Vec<Rc<dyn ResponseInterceptor>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request interceptor
    pub fn push_request(&mut self, interceptor: Rc<dyn RequestInterceptor>) {
        self.request.push(interceptor);
    }

    /// Append a response interceptor
    pub fn push_response(&mut self, interceptor: Rc<dyn ResponseInterceptor>) {
        self.response.push(interceptor);
    }

    /// Run the request chain. A rejection short-circuits the rest of the
    /// chain and is returned unchanged.
    pub fn prepare(&self, request: Result<Request, ClientError>) -> Result<Request, ClientError> {
        self.request
            .iter()
            .try_fold(request?, |request, interceptor| interceptor.on_request(request))
    }

    /// Run the response chain over an outcome
    pub fn complete(&self, outcome: Outcome) -> Outcome {
        self.response
            .iter()
            .fold(outcome, |outcome, interceptor| interceptor.on_response(outcome))
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("request", &self.request.len())
            .field("response", &self.response.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, ACCEPT};
    use reqwest::{Method, Url};
    use std::cell::RefCell;

    fn request() -> Request {
        Request::new(
            Method::GET,
            Url::parse("http://localhost/api/budget/summary").unwrap(),
        )
    }

    #[test]
    fn request_chain_runs_in_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut pipeline = Pipeline::new();
        for name in ["first", "second"] {
            let order = order.clone();
            pipeline.push_request(Rc::new(move |request: Request| -> Result<Request, ClientError> {
                order.borrow_mut().push(name);
                Ok(request)
            }));
        }

        pipeline.prepare(Ok(request())).unwrap();
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn rejection_skips_remaining_request_interceptors() {
        let touched = Rc::new(RefCell::new(false));
        let mut pipeline = Pipeline::new();
        pipeline.push_request(Rc::new(|_: Request| -> Result<Request, ClientError> {
            Err(ClientError::Setup("refused".into()))
        }));
        {
            let touched = touched.clone();
            pipeline.push_request(Rc::new(move |request: Request| -> Result<Request, ClientError> {
                *touched.borrow_mut() = true;
                Ok(request)
            }));
        }

        let result = pipeline.prepare(Ok(request()));
        assert!(matches!(result, Err(ClientError::Setup(ref m)) if m == "refused"));
        assert!(!*touched.borrow());
    }

    #[test]
    fn build_error_passes_through_unchanged() {
        let mut pipeline = Pipeline::new();
        pipeline.push_request(Rc::new(|mut request: Request| -> Result<Request, ClientError> {
            request
                .headers_mut()
                .insert(ACCEPT, HeaderValue::from_static("application/json"));
            Ok(request)
        }));

        let result = pipeline.prepare(Err(ClientError::Setup("malformed".into())));
        assert!(matches!(result, Err(ClientError::Setup(ref m)) if m == "malformed"));
    }

    #[test]
    fn response_chain_sees_every_failure() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut pipeline = Pipeline::new();
        {
            let seen = seen.clone();
            pipeline.push_response(Rc::new(move |outcome: Outcome| {
                if let Err(error) = &outcome {
                    seen.borrow_mut().push(error.kind());
                }
                outcome
            }));
        }

        let outcome = pipeline.complete(Err(ClientError::NoResponse("offline".into())));
        assert!(matches!(outcome, Err(ClientError::NoResponse(_))));
        assert_eq!(seen.borrow().len(), 1);
    }
}
