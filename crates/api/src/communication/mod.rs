mod create_communication;
mod delete_communication;
mod get_communications;
mod update_communication;

use actix_web::web;
use create_communication::create_communication_controller;
use delete_communication::delete_communication_controller;
use get_communications::get_communications_controller;
use update_communication::update_communication_controller;

const INVALID_NOTIFICATION_DELAY: &str =
    "La durée en jour pour un rappel doit être un nombre compris entre 0 et 30";
const COMMUNICATION_DOESNT_EXIST: &str = "Les communications n'existent pas";

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/communications",
        web::get().to(get_communications_controller),
    );
    cfg.route(
        "/communications",
        web::post().to(create_communication_controller),
    );
    cfg.route(
        "/communications/{pk_communication}",
        web::put().to(update_communication_controller),
    );
    cfg.route(
        "/communications/{pk_communication}",
        web::delete().to(delete_communication_controller),
    );
}
