use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

/// Invoke a command and decode its reply.
async fn call<A: Serialize, R: DeserializeOwned>(cmd: &str, args: &A) -> Result<R, String> {
    let args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke(cmd, args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Invoke a command whose reply carries nothing.
async fn call_unit<A: Serialize>(cmd: &str, args: &A) -> Result<(), String> {
    let args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    invoke(cmd, args).await.map(|_| ()).map_err(js_error)
}

#[derive(Serialize)]
struct NoArgs {}

// -- Arg structs for serialization --

#[derive(Serialize)]
struct SetApiKeyArgs<'a> {
    service: &'a str,
    key: &'a str,
}

#[derive(Serialize)]
struct ServiceArgs<'a> {
    service: &'a str,
}

#[derive(Serialize)]
struct GetPreferenceArgs<'a> {
    key: &'a str,
}

#[derive(Serialize)]
struct SetPreferenceArgs<'a> {
    key: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct RequestArgs<'a, T> {
    request: &'a T,
}

#[derive(Serialize)]
struct InputArgs<'a, T> {
    input: &'a T,
}

#[derive(Serialize)]
struct MealArgs<'a> {
    meal: &'a MealInput,
}

#[derive(Serialize)]
struct QueryArgs<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct MessageArgs<'a> {
    message: &'a str,
}

// -- Keychain and preferences --

pub async fn set_api_key(service: &str, key: &str) -> Result<(), String> {
    call_unit("set_api_key", &SetApiKeyArgs { service, key }).await
}

pub async fn get_api_key(service: &str) -> Result<Option<String>, String> {
    call("get_api_key", &ServiceArgs { service }).await
}

pub async fn delete_api_key(service: &str) -> Result<(), String> {
    call_unit("delete_api_key", &ServiceArgs { service }).await
}

pub async fn get_preference(key: &str) -> Result<Option<String>, String> {
    call("get_preference", &GetPreferenceArgs { key }).await
}

pub async fn set_preference(key: &str, value: &str) -> Result<(), String> {
    call_unit("set_preference", &SetPreferenceArgs { key, value }).await
}

// -- Health report matching backend struct --

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthReport {
    pub gemini_api_key_set: bool,
    pub firebase_api_key_set: bool,
    pub data_dir_accessible: bool,
    pub data_dir_path: Option<String>,
    pub signed_in: bool,
}

pub async fn run_health_check() -> Result<HealthReport, String> {
    call("run_health_check", &NoArgs {}).await
}

// -- Auth --

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn signup(request: &SignupRequest) -> Result<Session, String> {
    call("signup", &RequestArgs { request }).await
}

pub async fn login(request: &LoginRequest) -> Result<Session, String> {
    call("login", &RequestArgs { request }).await
}

pub async fn logout() -> Result<(), String> {
    call_unit("logout", &NoArgs {}).await
}

pub async fn current_session() -> Result<Option<Session>, String> {
    call("current_session", &NoArgs {}).await
}

// -- Profile and goals --

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProfileInput {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    pub goal: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RangeWarning {
    pub field: String,
    pub message: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoalSummary {
    pub bmi: f64,
    pub bmi_category: String,
    pub bmr: f64,
    pub maintenance_calories: i64,
    pub daily_calorie_target: i64,
    pub ideal_range: (i64, i64),
    pub warnings: Vec<RangeWarning>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileView {
    pub profile: Option<ProfileInput>,
    pub summary: Option<GoalSummary>,
    pub calorie_goal: Option<f64>,
}

pub async fn calculate_goals(input: &ProfileInput) -> Result<GoalSummary, String> {
    call("calculate_goals", &InputArgs { input }).await
}

pub async fn save_profile(input: &ProfileInput) -> Result<ProfileView, String> {
    call("save_profile", &InputArgs { input }).await
}

pub async fn get_profile() -> Result<ProfileView, String> {
    call("get_profile", &NoArgs {}).await
}

// -- Meal tracking --

#[derive(Debug, Clone, Default, Serialize)]
pub struct MealInput {
    pub name: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggedMeal {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub source: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeeklyDay {
    pub day: String,
    pub calories: f64,
    pub goal: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MealSuggestion {
    pub name: String,
    pub source: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl From<&MealSuggestion> for MealInput {
    fn from(s: &MealSuggestion) -> Self {
        MealInput {
            name: Some(s.name.clone()),
            calories: Some(s.calories),
            protein: Some(s.protein),
            carbs: Some(s.carbs),
            fat: Some(s.fat),
            source: Some(s.source.clone()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackingData {
    pub logged_meals: Vec<LoggedMeal>,
    pub calories_consumed: f64,
    pub points: u64,
    pub weekly_data: Vec<WeeklyDay>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackingView {
    pub data: TrackingData,
    pub daily_target: i64,
    pub remaining_calories: f64,
    pub health_summary: String,
}

pub async fn log_meal(meal: &MealInput) -> Result<TrackingView, String> {
    call("log_meal", &MealArgs { meal }).await
}

pub async fn get_tracking_data() -> Result<TrackingView, String> {
    call("get_tracking_data", &NoArgs {}).await
}

pub async fn search_meal_suggestions(query: &str) -> Result<Vec<MealSuggestion>, String> {
    call("search_meal_suggestions", &QueryArgs { query }).await
}

pub async fn share_progress_url() -> Result<String, String> {
    call("share_progress_url", &NoArgs {}).await
}

// -- Progress and badges --

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProgressInput {
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub calorie_intake: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MealPlanSnapshot {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub total_calories: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProgressEntry {
    /// DD/MM/YYYY
    pub date: String,
    pub weight: f64,
    pub bmi: f64,
    pub calorie_intake: f64,
    pub health_advice: String,
    pub calorie_advice: String,
    pub meal_plan_adherence: String,
    #[serde(default)]
    pub meal_plan: Option<MealPlanSnapshot>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProgressOutcome {
    pub entry: ProgressEntry,
    pub weekly: Vec<ProgressEntry>,
    pub newly_unlocked: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProgressOverview {
    pub entries: Vec<ProgressEntry>,
    pub weekly: Vec<ProgressEntry>,
    pub badges: Vec<String>,
}

pub async fn record_progress(input: &ProgressInput) -> Result<ProgressOutcome, String> {
    call("record_progress", &InputArgs { input }).await
}

pub async fn get_progress() -> Result<ProgressOverview, String> {
    call("get_progress", &NoArgs {}).await
}

// -- Meal plans --

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlannedMeal {
    pub name: String,
    pub calories: f64,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DietPlan {
    pub plan_name: String,
    pub breakfast: PlannedMeal,
    pub lunch: PlannedMeal,
    pub dinner: PlannedMeal,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanRequest {
    pub dietary_preferences: String,
    pub calorie_goal: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratedPlan {
    pub plan: DietPlan,
    pub grocery_list: Vec<String>,
    pub warning: Option<String>,
}

pub async fn generate_diet_plan(request: &PlanRequest) -> Result<GeneratedPlan, String> {
    call("generate_diet_plan", &RequestArgs { request }).await
}

pub async fn list_diet_plans() -> Result<Vec<DietPlan>, String> {
    call("list_diet_plans", &NoArgs {}).await
}

pub async fn get_grocery_list() -> Result<Vec<String>, String> {
    call("get_grocery_list", &NoArgs {}).await
}

// -- AI --

#[derive(Debug, Clone, Serialize)]
pub struct PhotoRequest {
    pub image_base64: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MealAnalysis {
    pub description: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MealAnalysis {
    pub fn to_meal_input(&self) -> MealInput {
        MealInput {
            name: Some(self.description.clone()),
            calories: Some(self.calories),
            protein: Some(self.protein),
            carbs: Some(self.carbs),
            fat: Some(self.fat),
            source: Some("scanned".to_string()),
        }
    }
}

pub async fn analyze_meal_photo(request: &PhotoRequest) -> Result<MealAnalysis, String> {
    call("analyze_meal_photo", &RequestArgs { request }).await
}

pub async fn send_chat_message(message: &str) -> Result<String, String> {
    call("send_chat_message", &MessageArgs { message }).await
}
