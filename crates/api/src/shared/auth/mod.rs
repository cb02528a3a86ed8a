use crate::error::BirthdaysError;
use actix_web::HttpRequest;
use birthdays_domain::{Admin, ID};
use birthdays_infra::BirthdaysContext;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

const JWT_ISSUER: &str = "eanniversaires";
const JWT_AUDIENCE: &str = "eanniversaires-admin";

/// The authenticated admin a token was issued for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminClaims {
    pub pk_admin: ID,
    pub mail: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    iss: String,
    aud: String,
    iat: i64, // Issued at (as UTC timestamp in seconds)
    nbf: i64, // Not valid before
    exp: i64, // Expiration time
    data: AdminClaims,
}

#[derive(Debug, PartialEq)]
enum TokenError {
    Missing,
    MalformedHeader,
    Expired,
    NotYetValid,
    InvalidSignature,
    Malformed,
    Invalid,
}

impl TokenError {
    fn message(&self) -> &'static str {
        match self {
            Self::Missing => "Token JWT non fourni",
            Self::MalformedHeader => {
                "L'en-tête Authorization doit être de la forme : Bearer <token>"
            }
            Self::Expired => "Le token JWT a expiré",
            Self::NotYetValid => "Le token JWT n'est pas encore valide",
            Self::InvalidSignature => "La signature du token JWT est invalide",
            Self::Malformed => "Erreur dans le format du token JWT",
            Self::Invalid => "Erreur lors de la validation du token JWT",
        }
    }
}

impl From<TokenError> for BirthdaysError {
    fn from(e: TokenError) -> Self {
        Self::Unauthorized(e.message().into())
    }
}

fn now_secs(ctx: &BirthdaysContext) -> i64 {
    ctx.sys.get_timestamp_millis() / 1000
}

/// Issues a signed token for the `Admin`. Returns the token and its expiry in seconds.
pub fn issue_token(
    admin: &Admin,
    ctx: &BirthdaysContext,
) -> Result<(String, i64), jsonwebtoken::errors::Error> {
    let iat = now_secs(ctx);
    let exp = iat + ctx.config.jwt_expires_in_secs;
    let claims = Claims {
        iss: JWT_ISSUER.into(),
        aud: JWT_AUDIENCE.into(),
        iat,
        nbf: iat,
        exp,
        data: AdminClaims {
            pk_admin: admin.id.clone(),
            mail: admin.mail.clone(),
        },
    };
    let key = EncodingKey::from_secret(ctx.config.jwt_secret.as_bytes());
    let token = encode(&Header::new(Algorithm::HS256), &claims, &key)?;

    Ok((token, exp))
}

// Time claims are checked against `ctx.sys` instead of the wall clock
fn decode_token(token: &str, ctx: &BirthdaysContext) -> Result<AdminClaims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.set_issuer(&[JWT_ISSUER]);
    validation.set_audience(&[JWT_AUDIENCE]);
    validation.set_required_spec_claims(&["exp", "nbf", "iss", "aud"]);

    let key = DecodingKey::from_secret(ctx.config.jwt_secret.as_bytes());
    let claims = decode::<Claims>(token, &key, &validation)
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => TokenError::Malformed,
            _ => TokenError::Invalid,
        })?
        .claims;

    let now = now_secs(ctx);
    if now >= claims.exp {
        return Err(TokenError::Expired);
    }
    if now < claims.nbf {
        return Err(TokenError::NotYetValid);
    }

    Ok(claims.data)
}

fn parse_authtoken_header(req: &HttpRequest) -> Result<String, TokenError> {
    let header = req
        .headers()
        .get("authorization")
        .ok_or(TokenError::Missing)?
        .to_str()
        .map_err(|_| TokenError::MalformedHeader)?;

    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => {
            Ok(token.to_string())
        }
        (Some(scheme), None, None) if scheme.eq_ignore_ascii_case("bearer") => {
            Err(TokenError::Missing)
        }
        _ => Err(TokenError::MalformedHeader),
    }
}

/// Only lets requests carrying a valid admin bearer token through
pub fn protect_route(
    req: &HttpRequest,
    ctx: &BirthdaysContext,
) -> Result<AdminClaims, BirthdaysError> {
    let token = parse_authtoken_header(req)?;
    let claims = decode_token(&token, ctx)?;
    Ok(claims)
}
