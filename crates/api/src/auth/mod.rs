mod login;

use actix_web::web;
use login::login_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/login", web::post().to(login_controller));
}
