use oauth2::{
    AuthUrl, Client, ClientId, CsrfToken, RedirectUrl, ResponseType, Scope,
    StandardErrorResponse, TokenUrl, basic::BasicClient,
};

use crate::{config::AppConfig, consts};

pub type FacebookOauthClient = Client<
    StandardErrorResponse<oauth2::basic::BasicErrorResponseType>,
    oauth2::StandardTokenResponse<oauth2::EmptyExtraTokenFields, oauth2::basic::BasicTokenType>,
    oauth2::StandardTokenIntrospectionResponse<
        oauth2::EmptyExtraTokenFields,
        oauth2::basic::BasicTokenType,
    >,
    oauth2::StandardRevocableToken,
    StandardErrorResponse<oauth2::RevocationErrorResponseType>,
    oauth2::EndpointSet,
    oauth2::EndpointNotSet,
    oauth2::EndpointNotSet,
    oauth2::EndpointNotSet,
    oauth2::EndpointSet,
>;

/// Facebook Login dialog url plus the `state` value embedded in it
pub fn get_new_auth_url(client: &FacebookOauthClient) -> (oauth2::url::Url, CsrfToken) {
    client
        .authorize_url(CsrfToken::new_random)
        .add_scopes(get_facebook_oauth_scopes())
        .set_response_type(&ResponseType::new("code".into()))
        .url()
}

pub fn get_facebook_oauth_scopes() -> Vec<Scope> {
    consts::FACEBOOK_OAUTH_SCOPES
        .iter()
        .map(|scope| Scope::new(scope.to_string()))
        .collect()
}

fn build_redirect_url(app_config: &AppConfig, redirect_url: &str) -> String {
    format!(
        "{base_path}/{redirect_url}",
        base_path = app_config.base_url(),
        redirect_url = redirect_url,
    )
}

pub fn build_facebook_oauth_client(app_config: &AppConfig) -> anyhow::Result<FacebookOauthClient> {
    Ok(BasicClient::new(ClientId::new(app_config.fb_app_id.to_string()))
        .set_auth_uri(AuthUrl::new(app_config.facebook_dialog_url())?)
        .set_token_uri(TokenUrl::new(app_config.facebook_token_url())?)
        .set_redirect_uri(RedirectUrl::new(build_redirect_url(
            app_config,
            consts::FACEBOOK_OAUTH_CALLBACK_PATH,
        ))?))
}
