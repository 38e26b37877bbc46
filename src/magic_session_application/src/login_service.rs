use magic_session_core::{
    AuthBackend, AuthRequest, AuthResponseBuilder, AuthResponseHelpers, AuthResult,
    BackendCallError, BackendRequestEnvelope, BackendResponseEnvelope, CheckData, InterfaceName,
    LoginData, LoginServiceError, OutputEnvelope, RETURN_CODE_SESSION_EXPIRED,
    RETURN_CODE_SUCCESS, UsageError,
};

/// What a completion receives once an operation settles.
pub type Outcome = Result<AuthResult, LoginServiceError>;

/// Completion invoked exactly once when `login` or `check` settles.
pub type Completion<'a> = Box<dyn FnOnce(Outcome) + Send + 'a>;

/// Box a closure as a [`Completion`].
pub fn completion<'a, F>(f: F) -> Completion<'a>
where
    F: FnOnce(Outcome) + Send + 'a,
{
    Box::new(f)
}

/// Login service bound to a single request/response pair.
///
/// The service reads credentials from the request headers, makes exactly one
/// call to the auth server per operation and reports the result through two
/// independent channels:
///
/// - the response, which is written at most once (`login` success and the
///   default error handler write to it)
/// - the completion passed to `login`/`check`
///
/// When no completion is passed, failures are written to the response and
/// successes are not reported any further. For `check` this means a successful
/// call without a completion has no observable output.
pub struct LoginService<R, B, K>
where
    B: AuthResponseBuilder,
{
    request: R,
    builder: Option<B>,
    response: Option<B::Response>,
    backend: K,
}

impl<R, B, K> LoginService<R, B, K>
where
    R: AuthRequest,
    B: AuthResponseBuilder,
    K: AuthBackend,
{
    pub fn new(request: R, builder: B, backend: K) -> Self {
        Self {
            request,
            builder: Some(builder),
            response: None,
            backend,
        }
    }

    /// Open a new session from the `code` and `encrypt_data` headers.
    ///
    /// On success the session is written to the response whether or not a
    /// completion was passed, then the completion receives the user info.
    #[tracing::instrument(name = "LoginService::login", skip_all)]
    pub async fn login(&mut self, completion: Option<Completion<'_>>) {
        let outcome = self
            .try_login()
            .await
            .map_err(|e| LoginServiceError::login_failed(e.to_string()));

        self.complete(outcome, completion);
    }

    /// Validate the session in the `id` and `skey` headers.
    ///
    /// Nothing is written to the response on success.
    #[tracing::instrument(name = "LoginService::check", skip_all)]
    pub async fn check(&mut self, completion: Option<Completion<'_>>) {
        let outcome = self.try_check().await;

        self.complete(outcome, completion);
    }

    /// Write a classified error envelope to the response.
    pub fn write_error(&mut self, error: &LoginServiceError) {
        self.write(OutputEnvelope::Error(error.clone()));
    }

    /// Like [`write_error`](Self::write_error) for callers holding a type-erased
    /// error. Anything but a [`LoginServiceError`] is rejected and the response
    /// is left untouched.
    pub fn try_write_error(
        &mut self,
        error: &(dyn std::error::Error + 'static),
    ) -> Result<(), UsageError> {
        match error.downcast_ref::<LoginServiceError>() {
            Some(classified) => {
                self.write_error(classified);
                Ok(())
            }
            None => Err(UsageError::NotClassified(error.to_string())),
        }
    }

    pub fn is_written(&self) -> bool {
        self.response.is_some()
    }

    /// Release the written response, if any.
    pub fn into_response(self) -> Option<B::Response> {
        self.response
    }

    async fn try_login(&mut self) -> Result<AuthResult, BackendCallError> {
        let envelope = BackendRequestEnvelope::from_request(InterfaceName::Login, &self.request);
        let reply = call_backend(&self.backend, &envelope).await?;

        if reply.return_code != RETURN_CODE_SUCCESS {
            return Err(rejected(reply));
        }

        let data: LoginData =
            serde_json::from_value(reply.return_data).map_err(|_| BackendCallError::MalformedBody)?;
        let (session, result) = data.into_parts();

        tracing::debug!(session_id = %session.id, "session opened");
        self.write(OutputEnvelope::Session(session));

        Ok(result)
    }

    async fn try_check(&mut self) -> Result<AuthResult, LoginServiceError> {
        let check_failed = |e: BackendCallError| LoginServiceError::check_login_failed(e.to_string());

        let envelope = BackendRequestEnvelope::from_request(InterfaceName::Check, &self.request);
        let reply = call_backend(&self.backend, &envelope)
            .await
            .map_err(check_failed)?;

        match reply.return_code {
            RETURN_CODE_SUCCESS => serde_json::from_value::<CheckData>(reply.return_data)
                .map(AuthResult::from)
                .map_err(|_| check_failed(BackendCallError::MalformedBody)),
            RETURN_CODE_SESSION_EXPIRED => {
                Err(LoginServiceError::session_expired(reply.return_message))
            }
            _ => Err(check_failed(rejected(reply))),
        }
    }

    fn complete(&mut self, outcome: Outcome, completion: Option<Completion<'_>>) {
        if let Err(error) = &outcome {
            tracing::warn!(kind = %error.kind, message = %error.message, "auth operation failed");
        }

        match completion {
            Some(completion) => completion(outcome),
            None => {
                if let Err(error) = outcome {
                    self.write_error(&error);
                }
            }
        }
    }

    fn write(&mut self, envelope: OutputEnvelope) {
        match self.builder.take() {
            Some(builder) => self.response = Some(builder.ok_json(envelope.to_json())),
            None => tracing::warn!("response already written, dropping body"),
        }
    }
}

async fn call_backend<K: AuthBackend>(
    backend: &K,
    envelope: &BackendRequestEnvelope,
) -> Result<BackendResponseEnvelope, BackendCallError> {
    tracing::debug!(interface = %envelope.interface.interface_name, "calling auth server");

    backend.invoke(envelope).await?.into_response_envelope()
}

fn rejected(reply: BackendResponseEnvelope) -> BackendCallError {
    BackendCallError::Rejected {
        code: reply.return_code,
        message: reply.return_message,
    }
}
