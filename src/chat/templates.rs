//! Canned assistant replies.

pub const CHECKLIST: &str = "# Smart Project Checklist

## Setup Phase (2-3 hours)
☐ Set up development environment
☐ Initialize project repository
☐ Install required dependencies
☐ Configure project structure

## Development Phase (8-12 hours)
☐ Create core components and modules
☐ Implement main functionality
☐ Add styling and responsive design
☐ Integrate APIs and external services
☐ Handle error cases and edge scenarios

## Testing & Quality Assurance (3-4 hours)
☐ Write unit tests for core functions
☐ Perform integration testing
☐ Test on different devices and browsers
☐ Code review and optimization

## Deployment Phase (2-3 hours)
☐ Deploy to staging environment
☐ Run final tests and validations
☐ Deploy to production
☐ Monitor and gather feedback

*Estimated total time: 15-20 hours*
*This checklist is dynamically generated to help you stay organized and track progress effectively.*";

pub const RESUME: &str = "🎯 **Professional Achievement Examples:**

• **Led cross-functional team of 5 developers** to deliver enterprise web application 2 weeks ahead of schedule, resulting in 15% increase in client satisfaction scores

• **Architected and implemented scalable microservices infrastructure** serving 50,000+ daily users with 99.9% uptime and 40% reduction in response times

• **Developed automated testing framework** that reduced deployment bugs by 75% and decreased QA cycle time from 3 days to 6 hours

• **Spearheaded adoption of modern development practices** including CI/CD pipelines, resulting in 50% faster feature delivery and improved code quality metrics

• **Collaborated with product stakeholders** to translate business requirements into technical solutions, contributing to 25% increase in user engagement

• **Mentored 3 junior developers** through code reviews and pair programming sessions, leading to their promotion within 6 months

*💡 Tip: Quantify your impact with specific metrics and emphasize leadership, collaboration, and results-driven achievements.*";

pub const CAREER: &str = "🚀 **Career Guidance:**

I'd recommend focusing on building practical skills through hands-on projects and networking with professionals in your field. What specific career area interests you? I can help you:

• Create a skill development roadmap
• Generate project checklists
• Write compelling resume bullet points
• Plan networking strategies";

pub const SKILLS: &str = "📚 **Skill Development Strategy:**

For effective skill building, consider breaking down your goals into smaller, manageable tasks. I can help you create a learning checklist that includes:

• Structured learning milestones
• Practice project ideas
• Assessment criteria
• Resource recommendations

Would you like me to generate a customized checklist for your learning goals?";

pub const PORTFOLIO: &str = "💼 **Portfolio Development:**

Building a strong portfolio is crucial for career growth. Consider showcasing projects that demonstrate:

• Problem-solving abilities
• Technical proficiency
• Creative thinking
• Real-world impact

I can help you create project checklists to ensure you're covering all important aspects of development and documentation.";

pub const RESUME_TIPS: &str = "📄 **Resume Enhancement:**

I can help you generate impactful resume bullet points that highlight your achievements using the STAR method (Situation, Task, Action, Result). Would you like me to create some examples for you?

**Key tips:**
• Use action verbs
• Quantify your impact
• Focus on results
• Tailor to job requirements";

pub const WELCOME: &str = "👋 **Welcome to your AI Career Assistant!**

I'm here to help you with your professional development journey. Here's what I can do:

🎯 **Career Guidance** - Strategic advice for your career path
📋 **Smart Checklists** - Organized task lists for your projects
📄 **Resume Writing** - Impactful bullet points that get noticed
💡 **Skill Planning** - Roadmaps for learning new technologies

**Quick Actions:**
• Type \"checklist\" for a project management checklist
• Type \"resume\" for professional achievement examples
• Ask me about career advice, learning strategies, or project planning

What would you like to work on today?";

pub const FAILURE: &str = "❌ Sorry, I encountered an error while preparing a reply. Please try again.";
