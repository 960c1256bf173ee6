fn main() -> anyhow::Result<()> {
    zapflow_admin_lib::run()
}
