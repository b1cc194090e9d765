use prnotify_config::Config;
use prnotify_ghapi_interface::ApiService;
use prnotify_slack::NotifierService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
    pub notifier_service: &'a (dyn NotifierService + 'a),
}
